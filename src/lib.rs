//! # shunt
//!
//! **shunt** is a transport-level HTTP mocking engine for Rust test
//! suites, built on the `may` coroutine runtime. Register URL templates
//! bound to response handlers; any request a wrapped transport issues that
//! matches a template is diverted to the handler's synthetic output before
//! it reaches the network, while everything else passes through to the
//! real transport unchanged.
//!
//! ## Overview
//!
//! The engine is a decorator over a generic two-phase transport
//! abstraction (verb call returning a pending request, then `end()` with a
//! completion callback). Interception happens at the verb call; delivery
//! of a synthetic response is always asynchronous, after a configurable
//! delay, so mocked calls keep the completion ordering of real ones.
//!
//! ## Architecture
//!
//! - **[`pattern`]** - URL template compilation (`/users/:id`) into
//!   regex-backed matchers with ordered parameter names
//! - **[`registry`]** - the ordered route table and first-match-wins
//!   resolution with path-parameter extraction
//! - **[`handler`]** - handler, context, and completion types
//! - **[`transport`]** - the [`Transport`]/[`PendingRequest`] boundary the
//!   engine wraps
//! - **[`intercept`]** - the [`MockTransport`] decorator that
//!   short-circuits matched requests and delegates the rest
//! - **[`scheduler`]** - coroutine-based asynchronous delivery with fixed
//!   or per-call-evaluated delay
//! - **[`mocker`]** - the public [`Mocker`] engine handle
//!
//! ## Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use shunt::{Mocker, PendingRequest, Transport};
//!
//! let mocker = Mocker::new();
//! mocker
//!     .get("/topics/:id", |ctx| Ok(json!({ "id": ctx.param("id") })))?
//!     .post("/topics", |ctx| Ok(ctx.body))?;
//!
//! // `client` is whatever implements `Transport` in the host code.
//! let client = mocker.wrap(client);
//!
//! client.get("/topics/1", None).end(Some(Box::new(|outcome| {
//!     assert_eq!(outcome.unwrap(), json!({ "id": "1" }));
//! })));
//! ```
//!
//! Route matching is a linear scan in registration order — adequate for
//! test-suite scale and deliberately order-sensitive: the first route
//! whose method and template both match wins, regardless of specificity.

pub mod handler;
pub mod intercept;
pub mod mocker;
pub mod pattern;
pub mod registry;
pub mod scheduler;
pub mod transport;

pub use handler::{Completion, Handler, HandlerThunk, ParamVec, RequestContext};
pub use intercept::{MockRequest, MockTransport};
pub use mocker::Mocker;
pub use pattern::{PathPattern, PatternError};
pub use registry::{Registry, Route};
pub use scheduler::Timeout;
pub use transport::{PendingRequest, Transport};
