//! Line-oriented fixture files describing HTTP exchanges.
//!
//! A fixture is a sequence of sections, each opened by an identifier, an
//! optional single-character modifier and the `::` delimiter:
//!
//! ```text
//! :: Leading comment lines.
//! ReqMethod::POST
//! ReqPath::/some/path
//! ReqQuery+::key0=val0
//! &key1=val1
//! Header::Content-Type: application/json
//! Header::Authorization: Bearer token
//! Body::
//! {"key2": "val2"}
//! ```
//!
//! Blank lines between sections are ignored. Everything after the `Body`
//! opener, blank lines included, is body content. A `+` modifier joins the
//! section's lines without new lines.
//!
//! # Examples
//!
//! ```
//! use golden::{Document, FixtureRequest, SectionId};
//!
//! let input = "ReqMethod::GET\nReqPath::/api/users\nHeader::Accept: */*\n";
//!
//! let document: Document = input.parse().unwrap();
//! assert_eq!(document.section_count(), 3);
//! assert_eq!(document.joined(SectionId::ReqPath).unwrap(), "/api/users");
//!
//! let request = FixtureRequest::from_document(&document).unwrap();
//! let http_request = request.to_request().unwrap();
//! assert!(request.assert_matches(&http_request).is_ok());
//! ```

mod document;
mod error;
mod http;
mod recognizer;
mod section;

pub use document::{Document, DocumentBuilder};
pub use error::{FixtureError, Mismatch, ParseError};
pub use http::{
    BodyKind, FixtureRequest, FixtureResponse, header_lines, parse_header_lines, record_request,
    record_response,
};
pub use recognizer::{Recognized, recognize};
pub use section::{DELIMITER, MERGE, Modifier, Section, SectionId};

#[cfg(test)]
mod tests;
