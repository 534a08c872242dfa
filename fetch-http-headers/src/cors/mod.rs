//! CORS safelist classification of request and response headers.
//!
//! Classification is total: names that are not recognized
//! are simply not safelisted.

use crate::HeaderList;

mod limits;
#[doc(inline)]
pub use limits::CorsSafelistLimits;

mod names;
#[doc(inline)]
pub use names::{
    is_cors_non_wildcard_request_header_name, is_cors_safelisted_response_header_name,
    is_forbidden_request_header_name, is_forbidden_response_header_name,
    is_no_cors_safelisted_request_header, is_no_cors_safelisted_request_header_name,
    is_privileged_no_cors_request_header_name,
};

/// Returns `true` for a CORS-unsafe request header byte: a C0 control
/// other than tab, DEL or one of `"():<>?@[\]{}`.
#[inline]
pub const fn is_cors_unsafe_request_header_byte(c: char) -> bool {
    matches!(
        c,
        '\x00'..='\x08'
            | '\x0a'..='\x1f'
            | '"'
            | '('
            | ')'
            | ':'
            | '<'
            | '>'
            | '?'
            | '@'
            | '['
            | '\\'
            | ']'
            | '{'
            | '}'
            | '\x7f'
    )
}

/// Returns `true` if `value` contains any [CORS-unsafe request header byte].
///
/// [CORS-unsafe request header byte]: is_cors_unsafe_request_header_byte
pub fn contains_cors_unsafe_request_header_byte(value: &str) -> bool {
    value.chars().any(is_cors_unsafe_request_header_byte)
}

/// Returns `true` if `(name, value)` is a CORS-safelisted request header,
/// using the [default limits](CorsSafelistLimits::DEFAULT).
///
/// - `accept`: the value contains no [CORS-unsafe request header byte];
/// - `accept-language` and `content-language`: every character
///   is one of `0-9`, `A-Z`, `a-z`, space, `*`, `,`, `-`, `.`, `;` or `=`;
/// - `content-type`: the value contains no CORS-unsafe request header byte
///   and its MIME type essence is `application/x-www-form-urlencoded`,
///   `multipart/form-data` or `text/plain`;
/// - any other name is never safelisted.
///
/// The value can in all cases be at most 128 characters long.
///
/// ```
/// use fetch_http_headers::is_cors_safelisted_request_header;
///
/// assert!(is_cors_safelisted_request_header("Content-Type", "text/plain"));
/// assert!(!is_cors_safelisted_request_header("content-type", "text/<plain>"));
/// assert!(!is_cors_safelisted_request_header("x-custom", "text/plain"));
/// ```
///
/// [CORS-unsafe request header byte]: is_cors_unsafe_request_header_byte
pub fn is_cors_safelisted_request_header(name: &str, value: &str) -> bool {
    CorsSafelistLimits::DEFAULT.is_safelisted_request_header(name, value)
}

/// Collect the names of all headers in `list` which are not CORS-safelisted,
/// using the [default limits](CorsSafelistLimits::DEFAULT).
///
/// Each header is classified on its combined value. When the combined
/// length of all safelisted values exceeds 1024 characters,
/// every one of those names is reported as unsafe as well.
/// The result is lowercased, sorted and free of duplicates.
pub fn cors_unsafe_request_header_names(list: &HeaderList) -> Vec<String> {
    CorsSafelistLimits::DEFAULT.unsafe_request_header_names(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsafe_bytes() {
        for c in ('\0'..='\x08').chain('\x0a'..='\x1f') {
            assert!(is_cors_unsafe_request_header_byte(c), "char: {c:?}");
        }
        for c in "\"():<>?@[\\]{}\x7f".chars() {
            assert!(is_cors_unsafe_request_header_byte(c), "char: {c:?}");
        }
        for c in "\t azAZ09!#$%&'*+,-./;=^_`|~\u{80}\u{e9}\u{ff}".chars() {
            assert!(!is_cors_unsafe_request_header_byte(c), "char: {c:?}");
        }
    }

    #[test]
    fn safelisted_with_default_limits() {
        assert!(is_cors_safelisted_request_header("content-type", "text/plain"));
        assert!(!is_cors_safelisted_request_header(
            "content-type",
            "text/plain; x=<y>"
        ));
        assert!(!is_cors_safelisted_request_header(
            "accept",
            &"a".repeat(129)
        ));
    }

    #[test]
    fn unsafe_names_with_default_limits() {
        let mut list = HeaderList::new();
        for name in ["accept", "Accept-Language", "content-language"] {
            for _ in 0..2 {
                list.append(name, "a".repeat(100));
            }
        }
        assert_eq!(
            cors_unsafe_request_header_names(&list),
            ["accept", "accept-language", "content-language"]
        );

        let mut list = HeaderList::new();
        for name in ["accept", "accept-language", "content-language"] {
            list.append(name, "a".repeat(128));
        }
        list.combine("content-type", "text/plain;charset=utf-8");
        assert!(cors_unsafe_request_header_names(&list).is_empty());

        // four safelisted names of at most 128 each stay below the total limit
        list.append("x-custom", "1");
        assert_eq!(cors_unsafe_request_header_names(&list), ["x-custom"]);
    }

    #[test]
    fn unsafe_names_over_total_limit() {
        let limits = CorsSafelistLimits::new().with_max_value_len(512);
        let mut list = HeaderList::new();
        for name in ["accept", "accept-language", "content-language"] {
            list.append(name, "a".repeat(400));
        }
        list.append("content-type", "text/plain");
        list.append("x-custom", "1");

        assert_eq!(
            limits.unsafe_request_header_names(&list),
            [
                "accept",
                "accept-language",
                "content-language",
                "content-type",
                "x-custom"
            ]
        );
    }
}
