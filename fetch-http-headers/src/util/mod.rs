//! Text processing helpers shared by the header list and its classifiers.

mod quoted_string;
#[doc(inline)]
pub use quoted_string::{collect_http_quoted_string, collect_http_quoted_string_value};

mod split;
#[doc(inline)]
pub use split::decode_and_split;

/// HTTP tab or space: U+0009 TAB or U+0020 SPACE.
#[inline]
pub const fn is_http_tab_or_space(c: char) -> bool {
    matches!(c, '\t' | ' ')
}

/// HTTP whitespace: U+000A LF, U+000D CR or an [HTTP tab or space](is_http_tab_or_space).
#[inline]
pub const fn is_http_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\t' | ' ')
}

/// Remove leading and trailing [HTTP whitespace](is_http_whitespace).
#[inline]
pub fn trim_http_whitespace(s: &str) -> &str {
    s.trim_matches(is_http_whitespace)
}

/// Remove leading and trailing [HTTP tab or space](is_http_tab_or_space).
#[inline]
pub fn trim_http_tab_or_space(s: &str) -> &str {
    s.trim_matches(is_http_tab_or_space)
}
