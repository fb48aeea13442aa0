//! Strict MIME type parsing and serialization.
//!
//! Follows the WHATWG MIME Sniffing Standard:
//! - Parsing a MIME type into `type`, `subtype` and ordered parameters
//! - Serializing a parsed MIME type back to its canonical string
//! - HTTP token and quoted-string code point predicates
//! - HTTP quoted-string collection (Fetch Standard)
//!
//! # Examples
//!
//! ```
//! use mimesniff::MimeType;
//!
//! let mime = MimeType::parse("Text/HTML; charset=\"utf-8\"; charset=latin1").unwrap();
//! assert_eq!(mime.essence(), "text/html");
//! assert_eq!(mime.parameter("charset"), Some("utf-8"));
//! assert_eq!(mime.to_string(), "text/html;charset=utf-8");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`MimeType`] as its string form.
//! - `tracing`: debug events for dropped parameters and failed parses.

pub mod error;
pub mod grammar;
pub mod mime_type;
pub mod parameters;
pub mod quoted_string;

// Re-export commonly used types
pub use error::{Error, Result};
pub use grammar::{
    is_http_quoted_string_token_code_point, is_http_token_code_point,
    solely_contains_http_quoted_string_token_code_points, solely_contains_http_token_code_points,
};
pub use mime_type::{parse_mime_type, MimeType};
pub use parameters::Parameters;
pub use quoted_string::collect_http_quoted_string;
