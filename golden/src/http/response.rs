use std::str::FromStr;

use hyper::{HeaderMap, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    document::Document,
    error::{FixtureError, Mismatch},
    http::{
        body::BodyKind,
        headers::{header_values, section_headers},
    },
    section::SectionId,
};

/// HTTP response described by a fixture document.
#[derive(Debug, Clone)]
pub struct FixtureResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Option<String>,
}

impl FixtureResponse {
    pub fn from_document(document: &Document) -> Result<Self, FixtureError> {
        let code = document
            .joined(SectionId::RspCode)
            .filter(|c| !c.trim().is_empty())
            .ok_or(FixtureError::MissingSection(SectionId::RspCode))?;
        let status = code
            .trim()
            .parse::<u16>()
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .ok_or_else(|| FixtureError::InvalidStatus(code.clone()))?;

        let headers = section_headers(document.section(SectionId::Header))?;
        let body = document.joined(SectionId::Body);

        tracing::debug!(status = status.as_u16(), headers = headers.len(), "Loaded fixture response");

        Ok(Self {
            status,
            headers,
            body,
        })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn body_kind(&self) -> BodyKind {
        BodyKind::detect(&self.headers)
    }

    pub fn to_response(&self) -> Result<Response<String>, FixtureError> {
        let mut response = Response::builder()
            .status(self.status)
            .body(self.body.clone().unwrap_or_default())
            .map_err(|e| FixtureError::Http(e.to_string()))?;
        *response.headers_mut() = self.headers.clone();
        Ok(response)
    }

    /// Checks `got` against the fixture. Only headers named in the fixture
    /// are compared; `got` may carry more.
    pub fn assert_matches<B: AsRef<[u8]>>(&self, got: &Response<B>) -> Result<(), Mismatch> {
        if self.status != got.status() {
            return Err(Mismatch::Status {
                expected: self.status.as_u16(),
                actual: got.status().as_u16(),
            });
        }

        for name in self.headers.keys() {
            let expected = header_values(&self.headers, name);
            let actual = header_values(got.headers(), name);
            if expected != actual {
                return Err(Mismatch::Header {
                    name: name.to_string(),
                    expected,
                    actual,
                });
            }
        }

        self.body_kind().compare(
            self.body.as_deref().unwrap_or_default(),
            got.body().as_ref(),
        )
    }

    pub fn body_json<T: DeserializeOwned>(&self) -> Result<T, FixtureError> {
        let body = self
            .body
            .as_deref()
            .filter(|b| !b.is_empty())
            .ok_or(FixtureError::EmptyBody)?;
        Ok(serde_json::from_str(body)?)
    }
}

impl TryFrom<&Document> for FixtureResponse {
    type Error = FixtureError;

    fn try_from(document: &Document) -> Result<Self, Self::Error> {
        Self::from_document(document)
    }
}

impl FromStr for FixtureResponse {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_document(&s.parse::<Document>()?)
    }
}
