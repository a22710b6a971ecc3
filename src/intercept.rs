//! The interception adapter: a [`Transport`] decorator that short-circuits
//! matched requests and passes everything else through.
//!
//! [`MockTransport`] wraps an inner transport and implements the same
//! trait, so it is substituted wherever the host code accepts a transport
//! — an explicit dependency-injection seam rather than in-place mutation
//! of a shared client object.
//!
//! Each verb call resolves against the engine's registry immediately. The
//! resolution travels inside the returned [`MockRequest`], so the pairing
//! between a verb call and its later `end()` is exact for any number of
//! in-flight requests on the same transport. An intercepted request never
//! constructs an inner request at all; a pass-through request wraps the
//! inner builder and forwards `end()` to it unchanged, including the inner
//! transport's own error and timing behavior.
//!
//! There is no unwrap operation: once substituted, the layer stays in
//! place for the transport's lifetime.

use http::Method;
use serde_json::Value;
use tracing::{debug, warn};

use crate::handler::{Completion, HandlerThunk};
use crate::mocker::Mocker;
use crate::transport::{PendingRequest, Transport};

/// A transport decorator that diverts matched requests to mock handlers.
///
/// Created by [`Mocker::wrap`]. Reports [`is_mocked`](Transport::is_mocked)
/// as `true`; wrapping an already-mocked transport yields an inert layer
/// that only delegates, so double-wrapping is a no-op.
pub struct MockTransport<T: Transport> {
    inner: T,
    mocker: Mocker,
    delegate_only: bool,
}

impl<T: Transport> MockTransport<T> {
    pub(crate) fn new(mocker: Mocker, inner: T) -> Self {
        let delegate_only = inner.is_mocked();
        if delegate_only {
            warn!("Transport is already mocked; this layer will only delegate");
        }
        Self {
            inner,
            mocker,
            delegate_only,
        }
    }

    /// The wrapped transport
    #[must_use]
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Unwrap, discarding the mock layer
    #[must_use]
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Transport> Transport for MockTransport<T> {
    type Request = MockRequest<T::Request>;

    fn begin(&self, method: Method, url: &str, body: Option<Value>) -> Self::Request {
        if self.delegate_only {
            return MockRequest {
                resolution: None,
                inner: Some(self.inner.begin(method, url, body)),
                mocker: self.mocker.clone(),
            };
        }

        match self.mocker.resolve(&method, url, body.as_ref()) {
            Some(thunk) => {
                debug!(method = %method, url = %url, "Request intercepted");
                MockRequest {
                    resolution: Some(thunk),
                    inner: None,
                    mocker: self.mocker.clone(),
                }
            }
            None => {
                debug!(method = %method, url = %url, "Request passed through");
                MockRequest {
                    resolution: None,
                    inner: Some(self.inner.begin(method, url, body)),
                    mocker: self.mocker.clone(),
                }
            }
        }
    }

    fn is_mocked(&self) -> bool {
        true
    }
}

/// A pending request on a mocked transport.
///
/// Carries either the resolved handler thunk (intercepted) or the inner
/// transport's pending request (pass-through). Call sites chain `end()`
/// identically in both cases.
pub struct MockRequest<R: PendingRequest> {
    resolution: Option<HandlerThunk>,
    inner: Option<R>,
    mocker: Mocker,
}

impl<R: PendingRequest> PendingRequest for MockRequest<R> {
    fn end(self, completion: Option<Completion>) {
        match self.resolution {
            Some(thunk) => self.mocker.deliver(thunk, completion),
            None => {
                if let Some(inner) = self.inner {
                    inner.end(completion);
                }
            }
        }
    }
}
