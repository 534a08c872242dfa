//! The header-list model of the [Fetch standard], for the 🦀 Rust language.
//!
//! `fetch` is the end-user crate, re-exporting the member crates of the workspace:
//!
//! | module | crate | content |
//! |-|-|-|
//! | [`http::headers`] | `fetch-http-headers` | [`HeaderList`], guarded [`Headers`], quoted-string tokenizer, CORS safelisting, structured fields |
//! | [`error`] | `fetch-error` | [`OpaqueError`], error context and chain utilities |
//! | [`utils`] | `fetch-utils` | [`NonEmptyVec`], ASCII case-insensitive search, macros |
//! | [`telemetry`] | `tracing` | re-exports of the tracing crates used for logging |
//!
//! All operations are synchronous and in-memory. No subscriber is installed:
//! events are emitted through [`tracing`] and it is up to the application
//! to collect them, e.g. using [`telemetry::tracing::subscriber`].
//!
//! ```
//! use fetch::http::headers::{Guard, Headers, HeadersError};
//!
//! let mut headers = Headers::with_guard(Guard::Response);
//! headers.append("Content-Type", "text/html").unwrap();
//! headers.append("Set-Cookie", "id=42").unwrap(); // silently dropped
//! assert!(!headers.has("set-cookie").unwrap());
//!
//! assert_eq!(
//!     headers.append("X Bad", "1"),
//!     Err(HeadersError::InvalidHeaderName { name: "X Bad".to_owned() }),
//! );
//! ```
//!
//! [Fetch standard]: https://fetch.spec.whatwg.org/
//! [`HeaderList`]: crate::http::headers::HeaderList
//! [`Headers`]: crate::http::headers::Headers
//! [`OpaqueError`]: crate::error::OpaqueError
//! [`NonEmptyVec`]: crate::utils::collections::NonEmptyVec
//! [`tracing`]: crate::telemetry::tracing

#![warn(
    clippy::all,
    clippy::todo,
    clippy::empty_enum,
    clippy::enum_glob_use,
    clippy::mem_forget,
    clippy::unused_self,
    clippy::filter_map_next,
    clippy::needless_continue,
    clippy::needless_borrow,
    clippy::match_wildcard_for_single_variants,
    clippy::inefficient_to_string,
    clippy::macro_use_imports,
    clippy::option_option,
    clippy::unnested_or_patterns,
    clippy::str_to_string,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style,
    missing_debug_implementations,
    missing_docs
)]
#![deny(unreachable_pub)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

pub mod error {
    //! Error utilities for fetch and its users.
    //!
    //! See [`fetch_error`] for more information.

    #[doc(inline)]
    pub use ::fetch_error::*;
}

pub mod utils {
    //! Utilities used by fetch, available for others to use as well.

    #[doc(inline)]
    pub use ::fetch_utils::*;
}

pub mod http {
    //! HTTP modules of fetch.

    pub mod headers {
        //! The Fetch header-list model.
        //!
        //! See [`fetch_http_headers`] for more information.

        #[doc(inline)]
        pub use ::fetch_http_headers::*;
    }
}

pub mod telemetry {
    //! Telemetry re-exports.

    pub mod tracing {
        //! Tracing re-export, for your convenience.

        pub use ::tracing::*;

        pub use ::tracing_subscriber as subscriber;
    }
}
