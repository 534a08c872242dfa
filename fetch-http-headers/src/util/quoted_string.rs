//! Tokenizer for HTTP quoted-strings, as used within header values
//! such as `Content-Disposition` or `Accept` parameters.
//!
//! Both collectors start at a `"` and leave `position` one past the last
//! consumed character, so callers can keep tokenizing the remainder of the input.
//! Malformed input (a missing closing quote, a trailing backslash)
//! is tolerated and never results in an error.

/// Collect an HTTP quoted-string starting at `position`,
/// returning the raw span consumed, surrounding quotes included.
///
/// Returns `None`, leaving `position` untouched, when `position`
/// does not point at a `"` character.
///
/// ```
/// use fetch_http_headers::util::collect_http_quoted_string;
///
/// let input = r#""Hello" World"#;
/// let mut position = 0;
/// assert_eq!(collect_http_quoted_string(input, &mut position), Some(r#""Hello""#));
/// assert_eq!(position, 7);
/// ```
pub fn collect_http_quoted_string<'a>(input: &'a str, position: &mut usize) -> Option<&'a str> {
    let start = *position;
    scan_quoted_string(input, position, |_| {})?;
    input.get(start..*position)
}

/// Collect an HTTP quoted-string starting at `position`,
/// returning its unescaped interior value.
///
/// Returns `None`, leaving `position` untouched, when `position`
/// does not point at a `"` character.
///
/// ```
/// use fetch_http_headers::util::collect_http_quoted_string_value;
///
/// let input = r#""Hello \\ World\"""#;
/// let mut position = 0;
/// assert_eq!(
///     collect_http_quoted_string_value(input, &mut position).as_deref(),
///     Some(r#"Hello \ World""#),
/// );
/// assert_eq!(position, input.len());
/// ```
pub fn collect_http_quoted_string_value(input: &str, position: &mut usize) -> Option<String> {
    let mut value = String::new();
    scan_quoted_string(input, position, |c| value.push(c))?;
    Some(value)
}

fn scan_quoted_string(input: &str, position: &mut usize, mut push: impl FnMut(char)) -> Option<()> {
    let start = *position;
    let rest = input.get(start..)?;
    let mut chars = rest.char_indices();
    if !matches!(chars.next(), Some((_, '"'))) {
        return None;
    }

    let mut end = rest.len();
    while let Some((index, c)) = chars.next() {
        match c {
            '\\' => {
                if let Some((_, escaped)) = chars.next() {
                    push(escaped);
                } else {
                    // trailing backslash is kept as-is
                    push('\\');
                    break;
                }
            }
            '"' => {
                end = index + 1;
                break;
            }
            c => push(c),
        }
    }

    *position = start + end;
    Some(())
}
