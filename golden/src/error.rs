use thiserror::Error;

use crate::section::SectionId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: comment after header region closed: {content:?}")]
    CommentAfterHeader { line: usize, content: String },

    #[error("line {line}: content outside of any section: {content:?}")]
    OrphanLine { line: usize, content: String },

    #[error("fixture is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    #[error("fixture is missing the {0} section")]
    MissingSection(SectionId),

    #[error("invalid request method: {0}")]
    InvalidMethod(String),

    #[error("invalid response status: {0}")]
    InvalidStatus(String),

    #[error("invalid header line: {0:?}")]
    InvalidHeader(String),

    #[error("failed to build HTTP message: {0}")]
    Http(String),

    #[error("fixture does not have a body")]
    EmptyBody,

    #[error("JSON error: {0}")]
    Json(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl From<serde_json::Error> for FixtureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Difference between a fixture and a live HTTP message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Mismatch {
    #[error("expected request method {expected} got {actual}")]
    Method { expected: String, actual: String },

    #[error("expected request path {expected} got {actual}")]
    Path { expected: String, actual: String },

    #[error("expected request query {expected} got {actual}")]
    Query { expected: String, actual: String },

    #[error("expected response status code {expected} got {actual}")]
    Status { expected: u16, actual: u16 },

    #[error("expected header {name} values {expected:?} got {actual:?}")]
    Header {
        name: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("expected body to match want\n{expected}\ngot\n{actual}")]
    Body { expected: String, actual: String },

    #[error("body is not valid JSON: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
