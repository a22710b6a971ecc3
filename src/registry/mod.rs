//! # Registry Module
//!
//! The ordered mock route table and its matching engine.
//!
//! ## Overview
//!
//! The registry is responsible for:
//! - Compiling URL templates at registration time (via [`crate::pattern`])
//! - Keeping routes in registration order, duplicates included
//! - Resolving an intercepted request to the first matching handler
//! - Extracting path parameters for the handler's request context
//!
//! ## Matching policy
//!
//! Resolution is a linear scan in registration order: method equality
//! first, then the compiled matcher. The **first** route whose method and
//! pattern both match wins, regardless of specificity — if `/users/:id`
//! is registered before `/users/profile`, a request for `/users/profile`
//! resolves to the former. Order-sensitive test suites rely on this.
//!
//! Linear scan is deliberate: registries hold tens to low hundreds of
//! routes in test suites, where scan cost is noise.

mod core;
#[cfg(test)]
mod tests;

pub use core::{Registry, Route};
