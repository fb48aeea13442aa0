//! Error types for the mimesniff crate.

use thiserror::Error;

/// Fatal failures while parsing a MIME type string.
///
/// Only the essence (`type/subtype`) can fail a parse. Malformed parameters
/// are dropped individually and never surface here.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// No `/` separator in the trimmed input.
    #[error("the specified string does not contain a slash")]
    MissingSlash,

    /// The `type` is the empty string.
    #[error("the `type` is the empty string")]
    EmptyType,

    /// The `type` contains a non HTTP token code point.
    #[error("the `type` contains an invalid string")]
    InvalidType,

    /// The `subtype` is the empty string.
    #[error("the `subtype` is the empty string")]
    EmptySubtype,

    /// The `subtype` contains a non HTTP token code point.
    #[error("the `subtype` contains an invalid string")]
    InvalidSubtype,
}

/// Specialized Result type for mimesniff operations.
pub type Result<T> = std::result::Result<T, Error>;
