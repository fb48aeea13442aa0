//! HTTP quoted-string collection.
//!
//! Implements "collect an HTTP quoted string" from the Fetch Standard with the
//! extract-value flag set: the surrounding quotes are removed and backslash
//! escapes are resolved.

/// Collects an HTTP quoted string from `input`.
///
/// The first character of `input` is taken as the opening `"` and skipped.
/// Scanning stops at the first unescaped `"`; anything after it is ignored.
/// A `\` escapes the following character, whatever it is. A trailing `\`
/// with nothing after it is kept literally. A missing closing quote is
/// tolerated and yields everything collected up to the end of input.
///
/// # Examples
///
/// ```
/// use mimesniff::collect_http_quoted_string;
///
/// assert_eq!(collect_http_quoted_string(r#""Hello" World"#), "Hello");
/// assert_eq!(collect_http_quoted_string(r#""a\"b"#), "a\"b");
/// assert_eq!(collect_http_quoted_string("\"\\"), "\\");
/// ```
pub fn collect_http_quoted_string(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().skip(1);

    while let Some(c) = chars.next() {
        match c {
            '"' => break,
            '\\' => match chars.next() {
                Some(escaped) => output.push(escaped),
                None => {
                    output.push('\\');
                    break;
                }
            },
            _ => output.push(c),
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_value() {
        assert_eq!(collect_http_quoted_string("\"utf-8\""), "utf-8");
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(collect_http_quoted_string("\"\""), "");
        assert_eq!(collect_http_quoted_string("\""), "");
    }

    #[test]
    fn test_trailing_garbage_is_discarded() {
        assert_eq!(collect_http_quoted_string("\"Hello\" World"), "Hello");
        assert_eq!(collect_http_quoted_string("\"a\"\"b\""), "a");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(
            collect_http_quoted_string("\"Hello \\\\ World\\\"\""),
            "Hello \\ World\""
        );
        assert_eq!(collect_http_quoted_string("\"piyo\\@\""), "piyo@");
    }

    #[test]
    fn test_trailing_backslash() {
        assert_eq!(collect_http_quoted_string("\"\\"), "\\");
        assert_eq!(collect_http_quoted_string("\"abc\\"), "abc\\");
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(collect_http_quoted_string("\"no closing quote"), "no closing quote");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(collect_http_quoted_string("\"caf\u{e9}\""), "caf\u{e9}");
    }
}
