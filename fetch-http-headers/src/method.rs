//! HTTP request method classification.

use fetch_utils::macros::match_ignore_ascii_case_str;

/// Returns `true` for the CORS-safelisted methods `GET`, `HEAD` and `POST`.
///
/// Methods are case-sensitive, so `get` is not safelisted.
pub fn is_cors_safelisted_method(method: &str) -> bool {
    matches!(method, "GET" | "HEAD" | "POST")
}

/// Returns `true` for the forbidden methods `CONNECT`, `TRACE` and `TRACK`,
/// compared case-insensitively.
pub fn is_forbidden_method(method: &str) -> bool {
    match_ignore_ascii_case_str!(match (method) {
        "CONNECT" | "TRACE" | "TRACK" => true,
        _ => false,
    })
}

/// Normalize a method by uppercasing it, if it is a case-insensitive
/// match for `DELETE`, `GET`, `HEAD`, `OPTIONS`, `POST` or `PUT`.
///
/// Any other method is returned unchanged.
///
/// ```
/// use fetch_http_headers::normalize_method;
///
/// assert_eq!(normalize_method("post"), "POST");
/// assert_eq!(normalize_method("patch"), "patch");
/// ```
pub fn normalize_method(method: &str) -> String {
    match_ignore_ascii_case_str!(match (method) {
        "DELETE" | "GET" | "HEAD" | "OPTIONS" | "POST" | "PUT" => method.to_ascii_uppercase(),
        _ => method.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods() {
        for (method, safelisted, forbidden, normalized) in [
            ("GET", true, false, "GET"),
            ("get", false, false, "GET"),
            ("HEAD", true, false, "HEAD"),
            ("POST", true, false, "POST"),
            ("pOsT", false, false, "POST"),
            ("PUT", false, false, "PUT"),
            ("delete", false, false, "DELETE"),
            ("options", false, false, "OPTIONS"),
            ("patch", false, false, "patch"),
            ("CONNECT", false, true, "CONNECT"),
            ("trace", false, true, "trace"),
            ("Track", false, true, "Track"),
        ] {
            assert_eq!(is_cors_safelisted_method(method), safelisted, "{method}");
            assert_eq!(is_forbidden_method(method), forbidden, "{method}");
            assert_eq!(normalize_method(method), normalized, "{method}");
        }
    }
}
