//! MIME type essence extraction.

use std::borrow::Cow;

use crate::util::{is_http_tab_or_space, trim_http_whitespace};

/// Parse `value` as a MIME type and return its lowercase essence (`type/subtype`).
///
/// Optional whitespace around the `;` parameter delimiters and empty
/// parameters are accepted. Returns `None` when the value does not parse
/// as a MIME type.
///
/// ```
/// use fetch_http_headers::mime_essence;
///
/// assert_eq!(mime_essence(" Text/Plain; charset=utf-8 ").as_deref(), Some("text/plain"));
/// assert_eq!(mime_essence("text/plain ;charset=utf-8").as_deref(), Some("text/plain"));
/// assert_eq!(mime_essence("text"), None);
/// ```
pub fn mime_essence(value: &str) -> Option<String> {
    let value = strip_parameter_ows(trim_http_whitespace(value));
    let mime: mime::Mime = value.parse().ok()?;
    if mime.subtype().as_str().is_empty() {
        return None;
    }
    Some(mime.essence_str().to_ascii_lowercase())
}

/// Drop tabs and spaces around `;` delimiters, and repeated delimiters,
/// outside of quoted parameter values.
fn strip_parameter_ows(value: &str) -> Cow<'_, str> {
    if !value.contains(';') {
        return Cow::Borrowed(value);
    }

    let mut output = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    let mut quoted = false;
    while let Some(c) = chars.next() {
        match c {
            '\\' if quoted => {
                output.push(c);
                if let Some(escaped) = chars.next() {
                    output.push(escaped);
                }
            }
            '"' => {
                quoted = !quoted;
                output.push(c);
            }
            ';' if !quoted => {
                output.truncate(output.trim_end_matches(is_http_tab_or_space).len());
                if !output.ends_with(';') {
                    output.push(';');
                }
                while chars.next_if(|c| is_http_tab_or_space(*c)).is_some() {}
            }
            _ => output.push(c),
        }
    }
    Cow::Owned(output)
}
