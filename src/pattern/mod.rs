//! # Pattern Module
//!
//! URL template compilation for the mock route table. A template such as
//! `/users/:id` is compiled once, at registration time, into a regex-backed
//! matcher plus an ordered list of parameter names.
//!
//! ## Template syntax
//!
//! Templates split on `/`. A segment beginning with `:` declares a named
//! parameter (`:id`, `:user_name`); every other segment is matched literally.
//! There is no wildcard globbing beyond named parameters.
//!
//! ## Compilation
//!
//! 1. Literal segments are regex-escaped and concatenated.
//! 2. Parameter segments become `([^/]*)` capture groups; the parameter
//!    names are collected in declaration order, positionally aligned with
//!    the capture groups.
//!
//! A malformed template (`/users/:`, a stray `:` mid-segment) fails here,
//! synchronously, with a [`PatternError`] — callers discover bad templates
//! at registration, never at match time.
//!
//! ## Example
//!
//! ```rust
//! use shunt::pattern::PathPattern;
//!
//! let pattern = PathPattern::compile("/users/:id").unwrap();
//! let captures = pattern.captures("/users/42").unwrap();
//! assert_eq!(captures, vec![Some("42".to_string())]);
//! assert!(pattern.captures("/posts/42").is_none());
//! ```

mod core;
mod error;

pub use core::PathPattern;
pub use error::PatternError;
