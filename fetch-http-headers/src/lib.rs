//! # Fetch header lists
//!
//! The header-list model of the [Fetch standard]: an ordered multi-map of
//! case-insensitive header names to their values ([`HeaderList`]), a guarded
//! view on top of it ([`Headers`]) and the algorithms operating on them.
//!
//! - [`HeaderList`] supports appending, combining, deleting, decode-and-split
//!   and [structured field](structured) retrieval;
//! - [`Headers`] normalizes and validates all input and enforces its [`Guard`];
//! - the CORS safelist classifiers ([`is_cors_safelisted_request_header`],
//!   [`cors_unsafe_request_header_names`], ...) decide which headers
//!   require a CORS preflight;
//! - [`util`] contains the quoted-string tokenizer and other text helpers.
//!
//! Tokenizing, splitting and classifying never fail. Only explicit mutation
//! or initialization of [`Headers`] can return a [`HeadersError`].
//!
//! ```
//! use fetch_http_headers::{Guard, Headers, cors_unsafe_request_header_names};
//!
//! let mut headers = Headers::with_guard(Guard::Request);
//! headers.append("Content-Type", "text/plain").unwrap();
//! headers.append("X-Request-Id", "42").unwrap();
//! headers.append("Host", "example.com").unwrap(); // dropped, forbidden
//!
//! assert!(!headers.has("host").unwrap());
//! assert_eq!(
//!     cors_unsafe_request_header_names(headers.header_list()),
//!     ["x-request-id"],
//! );
//! ```
//!
//! [Fetch standard]: https://fetch.spec.whatwg.org/
//!
//! # Fetch
//!
//! Crate used by the end-user `fetch` crate and `fetch` crate authors alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod error;
#[doc(inline)]
pub use error::HeadersError;

pub mod structured;
pub mod util;

mod validate;
#[doc(inline)]
pub use validate::{
    is_header_value_char, is_token_char, is_valid_header_name, is_valid_header_value,
    normalize_header_name, normalize_header_value, validate_header_name, validate_header_value,
};

mod mime_type;
#[doc(inline)]
pub use mime_type::mime_essence;

mod method;
#[doc(inline)]
pub use method::{is_cors_safelisted_method, is_forbidden_method, normalize_method};

mod scheme;
#[doc(inline)]
pub use scheme::{is_fetch_scheme, is_http_scheme, is_local_scheme};

mod cors;
#[doc(inline)]
pub use cors::{
    CorsSafelistLimits, contains_cors_unsafe_request_header_byte,
    cors_unsafe_request_header_names, is_cors_non_wildcard_request_header_name,
    is_cors_safelisted_request_header, is_cors_safelisted_response_header_name,
    is_cors_unsafe_request_header_byte, is_forbidden_request_header_name,
    is_forbidden_response_header_name, is_no_cors_safelisted_request_header,
    is_no_cors_safelisted_request_header_name, is_privileged_no_cors_request_header_name,
};

mod list;
#[doc(inline)]
pub use list::{HeaderList, HeaderListIter};

mod headers;
#[doc(inline)]
pub use headers::{Guard, Headers, HeadersInit};
