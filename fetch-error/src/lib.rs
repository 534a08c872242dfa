//! Error types and utilities for fetch.
//!
//! The [`BoxError`] type is a type-erased error type that can be used to represent any error that
//! implements the `std::error::Error` trait. It is used where it is not that important
//! which specific error type is returned, only that an error occurred.
//!
//! Use [`ErrorContext`] to attach context to a `Result` or `Option`,
//! and [`ErrorExt`] to walk the resulting chain back to its root cause.
//!
//! # Fetch
//!
//! Crate used by the end-user `fetch` crate and the other `fetch-*` crates.

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

mod ext;
pub use ext::{ErrorContext, ErrorExt, OpaqueError};
