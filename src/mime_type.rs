//! MIME type parsing and serialization.
//!
//! Implements "parse a MIME type" and "serialize a MIME type" from the WHATWG
//! MIME Sniffing Standard (<https://mimesniff.spec.whatwg.org/#parsing-a-mime-type>).
//!
//! Only the essence can make a parse fail. Parameters that are malformed,
//! invalid or duplicated are dropped one by one and parsing continues.

use crate::error::{Error, Result};
use crate::grammar::{
    solely_contains_http_quoted_string_token_code_points, solely_contains_http_token_code_points,
    trim_ascii_whitespace, trim_ascii_whitespace_end,
};
use crate::parameters::Parameters;
use crate::quoted_string::collect_http_quoted_string;
use std::fmt;
use std::str::FromStr;

const TYPE_SUBTYPE_SEPARATOR: char = '/';
const PARAMETER_SEPARATOR: char = ';';
const NAME_VALUE_SEPARATOR: char = '=';

/// A parsed MIME type: `type`, `subtype` and ordered parameters.
///
/// Values are immutable once parsed. `type`, `subtype` and parameter names
/// are lower-cased; parameter values keep their original case.
///
/// # Examples
///
/// ```
/// use mimesniff::MimeType;
///
/// let mime: MimeType = "TEXT/HTML ; Charset=UTF-8".parse().unwrap();
/// assert_eq!(mime.type_(), "text");
/// assert_eq!(mime.subtype(), "html");
/// assert_eq!(mime.essence(), "text/html");
/// assert_eq!(mime.parameter("charset"), Some("UTF-8"));
/// assert_eq!(mime.to_string(), "text/html;charset=UTF-8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeType {
    type_: String,
    subtype: String,
    parameters: Parameters,
}

impl MimeType {
    /// Parses a MIME type string.
    ///
    /// Leading and trailing ASCII whitespace is ignored. Fails if there is no
    /// `/`, or if the type or subtype is empty or contains a character outside
    /// the HTTP token code points.
    pub fn parse(input: &str) -> Result<Self> {
        parse_mime_type(input)
    }

    /// Returns the `type` (e.g. `text`).
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// Returns the `subtype` (e.g. `html`).
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Returns the essence, `type/subtype` (e.g. `text/html`).
    pub fn essence(&self) -> String {
        format!("{}{}{}", self.type_, TYPE_SUBTYPE_SEPARATOR, self.subtype)
    }

    /// Returns the parameters in insertion order.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns the value of the parameter with exactly this name.
    ///
    /// Stored names are lower-case, so lower-case user-supplied names before
    /// looking them up.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name)
    }
}

/// Parses a MIME type string. See [`MimeType::parse`].
///
/// # Examples
///
/// ```
/// use mimesniff::{parse_mime_type, Error};
///
/// let mime = parse_mime_type("text/html; charset=utf-8").unwrap();
/// assert_eq!(mime.essence(), "text/html");
///
/// assert_eq!(parse_mime_type("text"), Err(Error::MissingSlash));
/// ```
pub fn parse_mime_type(input: &str) -> Result<MimeType> {
    let input = trim_ascii_whitespace(input);

    let (type_, rest) = input
        .split_once(TYPE_SUBTYPE_SEPARATOR)
        .ok_or_else(|| fatal(input, Error::MissingSlash))?;

    if type_.is_empty() {
        return Err(fatal(input, Error::EmptyType));
    }
    if !solely_contains_http_token_code_points(type_) {
        return Err(fatal(input, Error::InvalidType));
    }

    let (subtype, parameter_list) = match rest.split_once(PARAMETER_SEPARATOR) {
        Some((subtype, list)) => (trim_ascii_whitespace_end(subtype), Some(list)),
        None => (rest, None),
    };

    if subtype.is_empty() {
        return Err(fatal(input, Error::EmptySubtype));
    }
    if !solely_contains_http_token_code_points(subtype) {
        return Err(fatal(input, Error::InvalidSubtype));
    }

    let parameters = parameter_list.map(parse_parameters).unwrap_or_default();

    Ok(MimeType {
        type_: type_.to_ascii_lowercase(),
        subtype: subtype.to_ascii_lowercase(),
        parameters,
    })
}

/// Parses the `;`-separated parameter list that follows the subtype.
fn parse_parameters(list: &str) -> Parameters {
    let mut parameters = Parameters::new();

    for segment in list.split(PARAMETER_SEPARATOR).map(trim_ascii_whitespace) {
        let Some((name, raw_value)) = segment.split_once(NAME_VALUE_SEPARATOR) else {
            dropped(segment, "missing `=`");
            continue;
        };

        let name = name.to_lowercase();
        let value = if raw_value.starts_with('"') {
            collect_http_quoted_string(raw_value)
        } else if raw_value.is_empty() {
            dropped(segment, "empty value");
            continue;
        } else {
            raw_value.to_string()
        };

        if name.is_empty() || !solely_contains_http_token_code_points(&name) {
            dropped(segment, "invalid name");
        } else if !solely_contains_http_quoted_string_token_code_points(&value) {
            dropped(segment, "invalid value");
        } else if !parameters.insert_first(name, value) {
            dropped(segment, "duplicate name");
        }
    }

    parameters
}

#[cfg(feature = "tracing")]
fn dropped(segment: &str, reason: &str) {
    tracing::debug!(segment, reason, "dropping MIME type parameter");
}

#[cfg(not(feature = "tracing"))]
fn dropped(_segment: &str, _reason: &str) {}

#[cfg(feature = "tracing")]
fn fatal(input: &str, err: Error) -> Error {
    tracing::trace!(input, error = %err, "failed to parse MIME type");
    err
}

#[cfg(not(feature = "tracing"))]
fn fatal(_input: &str, err: Error) -> Error {
    err
}

/// Serializes per "serialize a MIME type": no whitespace, values quoted when
/// empty or not a token, with `"` and `\` escaped inside quotes.
impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.type_, TYPE_SUBTYPE_SEPARATOR, self.subtype)?;

        for (name, value) in &self.parameters {
            write!(f, "{}{}{}", PARAMETER_SEPARATOR, name, NAME_VALUE_SEPARATOR)?;

            if value.is_empty() || !solely_contains_http_token_code_points(value) {
                f.write_str("\"")?;
                for ch in value.chars() {
                    if ch == '"' || ch == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{}", ch)?;
                }
                f.write_str("\"")?;
            } else {
                f.write_str(value)?;
            }
        }

        Ok(())
    }
}

impl FromStr for MimeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_mime_type(s)
    }
}

impl TryFrom<&str> for MimeType {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        parse_mime_type(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MimeType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MimeType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct MimeTypeVisitor;

        impl<'de> Visitor<'de> for MimeTypeVisitor {
            type Value = MimeType;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a MIME type string")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<MimeType, E>
            where
                E: de::Error,
            {
                parse_mime_type(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(MimeTypeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let mime = parse_mime_type("text/html").unwrap();
        assert_eq!(mime.type_(), "text");
        assert_eq!(mime.subtype(), "html");
        assert!(mime.parameters().is_empty());
        assert_eq!(mime.to_string(), "text/html");
    }

    #[test]
    fn test_parse_trims_ascii_whitespace() {
        let mime = parse_mime_type(" \t\r\nimage/png\x0c ").unwrap();
        assert_eq!(mime.essence(), "image/png");
    }

    #[test]
    fn test_subtype_trailing_whitespace_before_semicolon() {
        let mime = parse_mime_type("text/html \t ;charset=utf-8").unwrap();
        assert_eq!(mime.subtype(), "html");
        assert_eq!(mime.parameter("charset"), Some("utf-8"));
    }

    #[test]
    fn test_whitespace_inside_essence_is_invalid() {
        assert_eq!(parse_mime_type("text /html"), Err(Error::InvalidType));
        assert_eq!(parse_mime_type("text/ html"), Err(Error::InvalidSubtype));
    }

    #[test]
    fn test_semicolon_before_slash() {
        assert_eq!(parse_mime_type("text;a=b/html"), Err(Error::InvalidType));
    }

    #[test]
    fn test_empty_subtype_before_parameters() {
        assert_eq!(parse_mime_type("text/;charset=utf-8"), Err(Error::EmptySubtype));
        assert_eq!(parse_mime_type("text/  ;charset=utf-8"), Err(Error::EmptySubtype));
    }

    #[test]
    fn test_second_slash_lands_in_subtype() {
        assert_eq!(parse_mime_type("text/html/x"), Err(Error::InvalidSubtype));
    }

    #[test]
    fn test_parameter_name_lowercased_value_preserved() {
        let mime = parse_mime_type("text/plain;FORMAT=Flowed").unwrap();
        assert_eq!(mime.parameter("format"), Some("Flowed"));
        assert_eq!(mime.parameter("FORMAT"), None);
    }

    #[test]
    fn test_empty_unquoted_value_dropped() {
        let mime = parse_mime_type("text/plain;a=;b=1").unwrap();
        assert_eq!(mime.parameters().len(), 1);
        assert_eq!(mime.parameter("b"), Some("1"));
    }

    #[test]
    fn test_empty_quoted_value_kept() {
        let mime = parse_mime_type("text/plain;a=\"\"").unwrap();
        assert_eq!(mime.parameter("a"), Some(""));
        assert_eq!(mime.to_string(), "text/plain;a=\"\"");
    }

    #[test]
    fn test_empty_and_invalid_names_dropped() {
        let mime = parse_mime_type("text/plain;=x;a b=1;c@=2;ok=3").unwrap();
        let names: Vec<_> = mime.parameters().keys().collect();
        assert_eq!(names, ["ok"]);
    }

    #[test]
    fn test_invalid_value_dropped() {
        let mime = parse_mime_type("text/plain;a=\u{3042};b=caf\u{e9}").unwrap();
        assert_eq!(mime.parameter("a"), None);
        assert_eq!(mime.parameter("b"), Some("caf\u{e9}"));
    }

    #[test]
    fn test_invalid_duplicate_does_not_block_later_valid() {
        // The first `a` is dropped, so the second one is the first accepted.
        let mime = parse_mime_type("text/plain;a=\u{3042};a=ok").unwrap();
        assert_eq!(mime.parameter("a"), Some("ok"));
    }

    #[test]
    fn test_unquoted_value_keeps_equals_and_spaces() {
        let mime = parse_mime_type("text/plain;a=b=c;d=e f").unwrap();
        assert_eq!(mime.parameter("a"), Some("b=c"));
        assert_eq!(mime.parameter("d"), Some("e f"));
        assert_eq!(mime.to_string(), "text/plain;a=\"b=c\";d=\"e f\"");
    }

    #[test]
    fn test_serialize_escapes() {
        let mime = parse_mime_type("a/b;x=\"q\\\"uote\\\\d\"").unwrap();
        assert_eq!(mime.parameter("x"), Some("q\"uote\\d"));
        assert_eq!(mime.to_string(), "a/b;x=\"q\\\"uote\\\\d\"");
    }

    #[test]
    fn test_token_value_unquoted_on_output() {
        let mime = parse_mime_type("a/b;x=\"token\"").unwrap();
        assert_eq!(mime.to_string(), "a/b;x=token");
    }

    #[test]
    fn test_from_str_and_try_from() {
        let a: MimeType = "Text/Plain".parse().unwrap();
        let b = MimeType::try_from("text/plain").unwrap();
        assert_eq!(a, b);
        assert_eq!("nope".parse::<MimeType>(), Err(Error::MissingSlash));
    }

    #[test]
    fn test_equality_includes_parameter_order() {
        let a = parse_mime_type("a/b;x=1;y=2").unwrap();
        let b = parse_mime_type("a/b;y=2;x=1").unwrap();
        assert_ne!(a, b);
    }
}
