//! utilities crate for fetch
//!
//! `fetch-utils` contains utilities used by `fetch`,
//! not really being part of one of the other crates, or used
//! by plenty of other crates.
//!
//! # Fetch
//!
//! Crate used by the end-user `fetch` crate and `fetch` crate authors alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(hidden)]
#[macro_use]
pub mod macros;

pub mod collections;
pub mod str;
