//! Handler-side types shared by the registry, the interception adapter,
//! and the response scheduler.
//!
//! A mock handler is an ordinary closure from a [`RequestContext`] to a
//! `Result<serde_json::Value, anyhow::Error>`. The matching engine wraps a
//! matched handler into a [`HandlerThunk`] — a one-shot closure that owns a
//! freshly built context — and the scheduler later invokes the thunk and
//! routes its outcome to the caller's [`Completion`].

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;

/// Maximum number of path parameters before heap allocation.
/// Mock endpoints rarely declare more than a handful of parameters, so the
/// common case stays on the stack.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage, in declaration order.
///
/// A plain (name, value) vector rather than a map: it preserves the order
/// parameters appear in the template, which a hash map would lose.
pub type ParamVec = SmallVec<[(String, String); MAX_INLINE_PARAMS]>;

/// User-supplied capability producing a synthetic response for a matched
/// request, or failing.
pub type Handler = Arc<dyn Fn(RequestContext) -> anyhow::Result<Value> + Send + Sync>;

/// A matched route's handler, bound to a fresh request context.
///
/// Produced by the matching engine, consumed exactly once by the scheduler.
pub type HandlerThunk = Box<dyn FnOnce() -> anyhow::Result<Value> + Send>;

/// Completion callback delivered exactly one `Ok(value)` or `Err(error)`.
///
/// Shared between synthetic delivery and real transport pass-through, so
/// calling code need not distinguish mocked failures from real ones.
pub type Completion = Box<dyn FnOnce(anyhow::Result<Value>) + Send>;

/// Everything a handler gets to see about the intercepted request.
///
/// Constructed fresh per intercepted call and discarded after the handler
/// runs.
#[derive(Debug, Clone, Serialize)]
pub struct RequestContext {
    /// The concrete request URL
    pub url: String,
    /// Path parameters extracted from the URL (e.g. `:id` -> `("id", "42")`)
    pub params: ParamVec,
    /// The request payload, or an empty JSON object if none was supplied
    pub body: Value,
}

impl RequestContext {
    /// Get an extracted path parameter by name
    #[inline]
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v.as_str())
    }
}
