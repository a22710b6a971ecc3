//! The transport boundary the engine intercepts.
//!
//! A [`Transport`] is any HTTP client abstraction that issues requests in
//! two phases: a verb call (`get`, `post`, `put`, `delete`) that returns a
//! pending request value, and a finalization call (`end`) on that value
//! that takes the completion callback and performs the actual I/O. This is
//! the natural seam for interception: the engine wraps a transport behind
//! the same trait and decides per call whether to short-circuit it.
//!
//! The engine never learns how a transport performs network I/O; it only
//! decides whether the I/O happens at all.

use http::Method;
use serde_json::Value;

use crate::handler::Completion;

/// A two-phase HTTP client abstraction.
///
/// Implementations hand out a [`PendingRequest`] from [`begin`](Self::begin)
/// and perform no I/O until `end` is called on it, matching the
/// request-builder convention of common HTTP clients. The four verb
/// methods are convenience bindings over `begin`.
pub trait Transport {
    /// The request-builder value returned by the verb entry points
    type Request: PendingRequest;

    /// Start a request. No I/O happens until `end` is called on the
    /// returned value.
    fn begin(&self, method: Method, url: &str, body: Option<Value>) -> Self::Request;

    /// Idempotency marker: whether this transport already routes through a
    /// mock layer. Wrapping a transport that reports `true` produces an
    /// inert layer, so double-wrapping behaves identically to wrapping
    /// once.
    fn is_mocked(&self) -> bool {
        false
    }

    fn get(&self, url: &str, body: Option<Value>) -> Self::Request {
        self.begin(Method::GET, url, body)
    }

    fn post(&self, url: &str, body: Option<Value>) -> Self::Request {
        self.begin(Method::POST, url, body)
    }

    fn put(&self, url: &str, body: Option<Value>) -> Self::Request {
        self.begin(Method::PUT, url, body)
    }

    fn delete(&self, url: &str, body: Option<Value>) -> Self::Request {
        self.begin(Method::DELETE, url, body)
    }
}

/// A request that has been started but not yet finalized.
pub trait PendingRequest {
    /// Finalize the request, delivering its outcome to `completion`.
    ///
    /// Exactly one of `Ok(value)` / `Err(error)` is delivered, exactly
    /// once, and never synchronously within this call. A `None` completion
    /// means the caller does not care about the outcome; the request still
    /// runs.
    fn end(self, completion: Option<Completion>);
}
