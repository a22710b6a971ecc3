//! The public engine handle tying the route table, the response delay,
//! and transport wrapping together.

use std::sync::{Arc, RwLock};

use http::Method;
use serde_json::Value;

use crate::handler::{Completion, HandlerThunk, RequestContext};
use crate::intercept::MockTransport;
use crate::pattern::PatternError;
use crate::registry::Registry;
use crate::scheduler::{self, Timeout};
use crate::transport::Transport;

/// Handle to one mock engine instance.
///
/// Cheap to clone; clones share the same route table and timeout setting.
/// Independent engines created with [`new`](Self::new) share nothing, so a
/// test can run its own isolated instance.
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
/// use shunt::{Mocker, PendingRequest, Transport};
///
/// let mocker = Mocker::new();
/// mocker.get("/users/:id", |ctx| {
///     Ok(json!({ "id": ctx.param("id") }))
/// })?;
///
/// let transport = mocker.wrap(real_transport);
/// transport.get("/users/42", None).end(Some(Box::new(|outcome| {
///     assert_eq!(outcome.unwrap(), json!({ "id": "42" }));
/// })));
/// ```
#[derive(Clone, Default)]
pub struct Mocker {
    registry: Arc<Registry>,
    timeout: Arc<RwLock<Timeout>>,
}

impl Mocker {
    /// Create an engine with an empty route table and zero delay
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route for `method`. Chainable.
    ///
    /// Routes are matched in registration order, first match wins; there
    /// is no uniqueness constraint.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] for a malformed template; nothing is
    /// registered.
    pub fn route<H>(&self, method: Method, template: &str, handler: H) -> Result<&Self, PatternError>
    where
        H: Fn(RequestContext) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.registry.register(method, template, handler)?;
        Ok(self)
    }

    /// Register a GET route. Chainable.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] for a malformed template.
    pub fn get<H>(&self, template: &str, handler: H) -> Result<&Self, PatternError>
    where
        H: Fn(RequestContext) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.route(Method::GET, template, handler)
    }

    /// Register a POST route. Chainable.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] for a malformed template.
    pub fn post<H>(&self, template: &str, handler: H) -> Result<&Self, PatternError>
    where
        H: Fn(RequestContext) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.route(Method::POST, template, handler)
    }

    /// Register a PUT route. Chainable.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] for a malformed template.
    pub fn put<H>(&self, template: &str, handler: H) -> Result<&Self, PatternError>
    where
        H: Fn(RequestContext) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.route(Method::PUT, template, handler)
    }

    /// Register a DELETE route. Chainable.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] for a malformed template.
    pub fn delete<H>(&self, template: &str, handler: H) -> Result<&Self, PatternError>
    where
        H: Fn(RequestContext) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.route(Method::DELETE, template, handler)
    }

    /// Remove every registered route. Idempotent.
    pub fn clear_routes(&self) {
        self.registry.clear();
    }

    /// The shared route table
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Current response delay setting
    #[must_use]
    pub fn timeout(&self) -> Timeout {
        self.timeout
            .read()
            .expect("timeout setting lock poisoned")
            .clone()
    }

    /// Set the response delay: a fixed `Duration` or a
    /// [`Timeout::provider`] closure re-evaluated per delivery.
    pub fn set_timeout(&self, timeout: impl Into<Timeout>) {
        *self
            .timeout
            .write()
            .expect("timeout setting lock poisoned") = timeout.into();
    }

    /// Wrap a transport in the interception layer.
    ///
    /// The returned transport consults this engine's route table on every
    /// verb call. Wrapping a transport that already reports
    /// [`is_mocked`](Transport::is_mocked) yields an inert layer, so
    /// double-wrapping behaves identically to wrapping once.
    pub fn wrap<T: Transport>(&self, inner: T) -> MockTransport<T> {
        MockTransport::new(self.clone(), inner)
    }

    pub(crate) fn resolve(
        &self,
        method: &Method,
        url: &str,
        body: Option<&Value>,
    ) -> Option<HandlerThunk> {
        self.registry.resolve(method, url, body)
    }

    /// Hand a resolved thunk to the scheduler. The delay is evaluated now,
    /// once per delivery.
    pub(crate) fn deliver(&self, thunk: HandlerThunk, completion: Option<Completion>) {
        let delay = self.timeout().delay();
        scheduler::deliver(thunk, completion, delay);
    }
}
