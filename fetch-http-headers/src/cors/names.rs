use fetch_utils::macros::match_ignore_ascii_case_str;
use fetch_utils::str::{any_eq_ignore_ascii_case, any_starts_with_ignore_ascii_case};

const FORBIDDEN_REQUEST_HEADER_NAMES: [&str; 20] = [
    "accept-charset",
    "accept-encoding",
    "access-control-request-headers",
    "access-control-request-method",
    "connection",
    "content-length",
    "cookie",
    "cookie2",
    "date",
    "dnt",
    "expect",
    "host",
    "keep-alive",
    "origin",
    "referer",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "via",
];

const FORBIDDEN_REQUEST_HEADER_PREFIXES: [&str; 2] = ["proxy-", "sec-"];

const CORS_SAFELISTED_RESPONSE_HEADER_NAMES: [&str; 7] = [
    "cache-control",
    "content-language",
    "content-length",
    "content-type",
    "expires",
    "last-modified",
    "pragma",
];

/// Returns `true` if `name` is a forbidden request header name,
/// one a script may not set on a request.
///
/// This covers a fixed set of connection management headers
/// and any name starting with `proxy-` or `sec-`.
///
/// ```
/// use fetch_http_headers::is_forbidden_request_header_name;
///
/// assert!(is_forbidden_request_header_name("Host"));
/// assert!(is_forbidden_request_header_name("Sec-Fetch-Mode"));
/// assert!(!is_forbidden_request_header_name("x-sec-token"));
/// assert!(!is_forbidden_request_header_name("accept"));
/// ```
pub fn is_forbidden_request_header_name(name: &str) -> bool {
    any_eq_ignore_ascii_case(name, FORBIDDEN_REQUEST_HEADER_NAMES)
        || any_starts_with_ignore_ascii_case(name, FORBIDDEN_REQUEST_HEADER_PREFIXES)
}

/// Returns `true` for `set-cookie` and `set-cookie2`, compared case-insensitively.
pub fn is_forbidden_response_header_name(name: &str) -> bool {
    match_ignore_ascii_case_str!(match (name) {
        "set-cookie" | "set-cookie2" => true,
        _ => false,
    })
}

/// Returns `true` for `authorization`, the one request header
/// a wildcard in `Access-Control-Allow-Headers` does not cover.
pub fn is_cors_non_wildcard_request_header_name(name: &str) -> bool {
    name.eq_ignore_ascii_case("authorization")
}

/// Returns `true` for `range`.
pub fn is_privileged_no_cors_request_header_name(name: &str) -> bool {
    name.eq_ignore_ascii_case("range")
}

/// Returns `true` if `name` is a CORS-safelisted response header name,
/// given the header names `list` exposed through `Access-Control-Expose-Headers`.
///
/// Names in `list` only count when they are not forbidden response header names.
///
/// ```
/// use fetch_http_headers::is_cors_safelisted_response_header_name;
///
/// assert!(is_cors_safelisted_response_header_name("Content-Type", &[] as &[&str]));
/// assert!(is_cors_safelisted_response_header_name("x-trace", &["X-Trace"]));
/// assert!(!is_cors_safelisted_response_header_name("set-cookie", &["set-cookie"]));
/// ```
pub fn is_cors_safelisted_response_header_name<S: AsRef<str>>(name: &str, list: &[S]) -> bool {
    any_eq_ignore_ascii_case(name, CORS_SAFELISTED_RESPONSE_HEADER_NAMES)
        || (!is_forbidden_response_header_name(name)
            && list
                .iter()
                .any(|exposed| exposed.as_ref().eq_ignore_ascii_case(name)))
}

/// Returns `true` for `accept`, `accept-language`, `content-language` and `content-type`.
pub fn is_no_cors_safelisted_request_header_name(name: &str) -> bool {
    match_ignore_ascii_case_str!(match (name) {
        "accept" | "accept-language" | "content-language" | "content-type" => true,
        _ => false,
    })
}

/// Returns `true` if `name` is a [no-CORS-safelisted request header name]
/// and `(name, value)` is a [CORS-safelisted request header].
///
/// [no-CORS-safelisted request header name]: is_no_cors_safelisted_request_header_name
/// [CORS-safelisted request header]: super::is_cors_safelisted_request_header
pub fn is_no_cors_safelisted_request_header(name: &str, value: &str) -> bool {
    is_no_cors_safelisted_request_header_name(name)
        && super::is_cors_safelisted_request_header(name, value)
}
