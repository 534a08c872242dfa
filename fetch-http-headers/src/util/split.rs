use super::{collect_http_quoted_string, trim_http_whitespace};

/// Split a header value into its comma-separated parts.
///
/// Commas inside quoted-strings do not split, and quoted-strings are kept
/// in their raw (quoted) form. Each part has leading and trailing
/// [HTTP whitespace](super::is_http_whitespace) removed. Empty parts are preserved, so the result
/// is never empty: an empty input yields a single empty part.
///
/// ```
/// use fetch_http_headers::util::decode_and_split;
///
/// assert_eq!(decode_and_split(r#"text/html, "a,b", x"#), [r#"text/html"#, r#""a,b""#, "x"]);
/// assert_eq!(decode_and_split("nosniff, "), ["nosniff", ""]);
/// ```
pub fn decode_and_split(input: &str) -> Vec<String> {
    let mut position = 0;
    let mut values = Vec::new();
    let mut value = String::new();

    loop {
        let rest = &input[position..];
        let stop = rest.find(['"', ',']).unwrap_or(rest.len());
        value.push_str(&rest[..stop]);
        position += stop;

        if input[position..].starts_with('"') {
            if let Some(quoted) = collect_http_quoted_string(input, &mut position) {
                value.push_str(quoted);
            }
            if position < input.len() {
                continue;
            }
        }

        values.push(trim_http_whitespace(&value).to_owned());
        value.clear();

        if position >= input.len() {
            return values;
        }

        // only a ',' can be left at this point
        position += 1;
    }
}
