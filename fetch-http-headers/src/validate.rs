//! Header name and value validation and normalization.
//!
//! Normalization always happens before validation:
//! names are ASCII-lowercased and values have leading and trailing
//! [HTTP whitespace](crate::util::is_http_whitespace) removed.

use crate::HeadersError;
use crate::util::trim_http_whitespace;

/// Returns `true` if `c` is a `tchar` as defined by RFC 7230.
#[inline]
pub const fn is_token_char(c: char) -> bool {
    matches!(
        c,
        'a'..='z'
            | 'A'..='Z'
            | '0'..='9'
            | '!'
            | '#'
            | '$'
            | '%'
            | '&'
            | '\''
            | '*'
            | '+'
            | '-'
            | '.'
            | '^'
            | '_'
            | '`'
            | '|'
            | '~'
    )
}

/// Returns `true` if `c` may appear in a header value:
/// a tab, printable ASCII or a character in the Latin-1 range `0x80..=0xFF`.
#[inline]
pub const fn is_header_value_char(c: char) -> bool {
    matches!(c, '\t' | '\x20'..='\x7e' | '\u{80}'..='\u{ff}')
}

/// Returns `true` if `name` is a non-empty RFC 7230 token.
pub fn is_valid_header_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_token_char)
}

/// Returns `true` if `value` is non-empty and only
/// contains [header value characters](is_header_value_char).
pub fn is_valid_header_value(value: &str) -> bool {
    !value.is_empty() && value.chars().all(is_header_value_char)
}

/// Validate a header name, failing with [`HeadersError::InvalidHeaderName`].
pub fn validate_header_name(name: &str) -> Result<(), HeadersError> {
    if is_valid_header_name(name) {
        Ok(())
    } else {
        Err(HeadersError::invalid_name(name))
    }
}

/// Validate a header value supplied for `name`,
/// failing with [`HeadersError::InvalidHeaderValue`].
pub fn validate_header_value(name: &str, value: &str) -> Result<(), HeadersError> {
    if is_valid_header_value(value) {
        Ok(())
    } else {
        Err(HeadersError::invalid_value(name, value))
    }
}

/// Normalize a header name by lowercasing its ASCII characters.
pub fn normalize_header_name(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// Normalize a header value by removing leading and trailing HTTP whitespace.
pub fn normalize_header_value(value: &str) -> &str {
    trim_http_whitespace(value)
}

/// Normalize and validate a header name.
pub(crate) fn normalize_and_validate_name(name: &str) -> Result<String, HeadersError> {
    let normalized = normalize_header_name(name);
    if is_valid_header_name(&normalized) {
        Ok(normalized)
    } else {
        Err(HeadersError::invalid_name(name))
    }
}

/// Normalize and validate a header name and value pair.
pub(crate) fn normalize_and_validate(
    name: &str,
    value: &str,
) -> Result<(String, String), HeadersError> {
    let normalized_name = normalize_and_validate_name(name)?;
    let normalized_value = normalize_header_value(value);
    validate_header_value(name, normalized_value)?;
    Ok((normalized_name, normalized_value.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names() {
        for (name, valid) in [
            ("", false),
            ("content-type", true),
            ("X-Custom_Header.v1", true),
            ("!#$%&'*+-.^_`|~09azAZ", true),
            ("with space", false),
            ("colon:", false),
            ("quote\"", false),
            ("paren(", false),
            ("slash/", false),
            ("at@", false),
            ("brace{", false),
            ("caf\u{e9}", false),
            ("tab\t", false),
            ("del\x7f", false),
        ] {
            assert_eq!(is_valid_header_name(name), valid, "name: {name:?}");
            assert_eq!(validate_header_name(name).is_ok(), valid, "name: {name:?}");
        }
    }

    #[test]
    fn header_values() {
        for (value, valid) in [
            ("", false),
            ("text/plain", true),
            ("a\tb", true),
            (" leading space kept by validation", true),
            ("caf\u{e9}", true),
            ("\u{ff}", true),
            ("\u{100}", false),
            ("\u{1f600}", false),
            ("nul\0", false),
            ("line\nfeed", false),
            ("carriage\rreturn", false),
            ("del\x7f", false),
        ] {
            assert_eq!(is_valid_header_value(value), valid, "value: {value:?}");
        }
    }

    #[test]
    fn normalize_then_validate() {
        assert_eq!(
            normalize_and_validate("Content-Type", " \ttext/plain\r\n").unwrap(),
            ("content-type".to_owned(), "text/plain".to_owned())
        );

        assert_eq!(
            normalize_and_validate("Bad Name", "x").unwrap_err(),
            HeadersError::invalid_name("Bad Name")
        );

        assert_eq!(
            normalize_and_validate("X-Empty", " \r\n\t ").unwrap_err(),
            HeadersError::invalid_value("X-Empty", "")
        );

        assert_eq!(
            normalize_and_validate("X-Inner", " a\nb ").unwrap_err(),
            HeadersError::invalid_value("X-Inner", "a\nb")
        );
    }
}
