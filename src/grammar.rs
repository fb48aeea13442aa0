//! Grammar validation helpers for MIME type strings.
//!
//! Code point classes from the WHATWG MIME Sniffing Standard, section 2.

/// Reports whether the character is an HTTP token code point.
///
/// token code point := "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "." /
///                     "^" / "_" / "`" / "|" / "~" / ASCII alphanumeric
pub fn is_http_token_code_point(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~'
        )
}

/// Reports whether the character is an HTTP quoted-string token code point.
///
/// quoted-string token code point := U+0009 / U+0020..U+007E / U+0080..U+00FF
pub fn is_http_quoted_string_token_code_point(c: char) -> bool {
    matches!(c, '\t' | '\u{20}'..='\u{7e}' | '\u{80}'..='\u{ff}')
}

/// Reports whether the character is ASCII whitespace (tab, LF, FF, CR, space).
pub fn is_ascii_whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Reports whether the string solely contains HTTP token code points.
///
/// The empty string passes; callers that require a non-empty token check that separately.
pub fn solely_contains_http_token_code_points(s: &str) -> bool {
    s.chars().all(is_http_token_code_point)
}

/// Reports whether the string solely contains HTTP quoted-string token code points.
pub fn solely_contains_http_quoted_string_token_code_points(s: &str) -> bool {
    s.chars().all(is_http_quoted_string_token_code_point)
}

/// Strips leading and trailing ASCII whitespace.
pub(crate) fn trim_ascii_whitespace(s: &str) -> &str {
    s.trim_matches(is_ascii_whitespace)
}

/// Strips trailing ASCII whitespace.
pub(crate) fn trim_ascii_whitespace_end(s: &str) -> &str {
    s.trim_end_matches(is_ascii_whitespace)
}
