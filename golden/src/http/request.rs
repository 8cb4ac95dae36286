use std::str::FromStr;

use hyper::{HeaderMap, Method, Request};
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

/// HTTP request described by a fixture document.
#[derive(Debug, Clone)]
pub struct FixtureRequest {
    method: Method,
    path: String,
    query: Option<String>,
    headers: HeaderMap,
    body: Option<String>,
}

impl FixtureRequest {
    pub fn from_document(document: &Document) -> Result<Self, FixtureError> {
        let method = document
            .joined(SectionId::ReqMethod)
            .filter(|m| !m.trim().is_empty())
            .ok_or(FixtureError::MissingSection(SectionId::ReqMethod))?;
        let method = Method::from_bytes(method.trim().as_bytes())
            .map_err(|_| FixtureError::InvalidMethod(method.clone()))?;

        let path = document
            .joined(SectionId::ReqPath)
            .filter(|p| !p.is_empty())
            .ok_or(FixtureError::MissingSection(SectionId::ReqPath))?;

        let query = document
            .joined(SectionId::ReqQuery)
            .filter(|q| !q.is_empty());

        let headers = section_headers(document.section(SectionId::Header))?;
        let body = document.joined(SectionId::Body);

        tracing::debug!(%method, %path, headers = headers.len(), "Loaded fixture request");

        Ok(Self {
            method,
            path,
            query,
            headers,
            body,
        })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
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

    /// Path with the query string appended, if any.
    pub fn uri(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }

    pub fn to_request(&self) -> Result<Request<String>, FixtureError> {
        let mut request = Request::builder()
            .method(self.method.clone())
            .uri(self.uri())
            .body(self.body.clone().unwrap_or_default())
            .map_err(|e| FixtureError::Http(e.to_string()))?;
        *request.headers_mut() = self.headers.clone();
        Ok(request)
    }

    /// Checks `got` against the fixture. Only headers named in the fixture
    /// are compared; `got` may carry more.
    pub fn assert_matches<B: AsRef<[u8]>>(&self, got: &Request<B>) -> Result<(), Mismatch> {
        if self.method != *got.method() {
            return Err(Mismatch::Method {
                expected: self.method.to_string(),
                actual: got.method().to_string(),
            });
        }

        if self.path != got.uri().path() {
            return Err(Mismatch::Path {
                expected: self.path.clone(),
                actual: got.uri().path().to_string(),
            });
        }

        let query = self.query.as_deref().unwrap_or_default();
        let got_query = got.uri().query().unwrap_or_default();
        if query != got_query {
            return Err(Mismatch::Query {
                expected: query.to_string(),
                actual: got_query.to_string(),
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

impl TryFrom<&Document> for FixtureRequest {
    type Error = FixtureError;

    fn try_from(document: &Document) -> Result<Self, Self::Error> {
        Self::from_document(document)
    }
}

impl FromStr for FixtureRequest {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_document(&s.parse::<Document>()?)
    }
}
