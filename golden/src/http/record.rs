use hyper::{Request, Response};

use crate::{
    document::{Document, DocumentBuilder},
    http::{body::normalize, headers::header_lines},
    section::{Modifier, SectionId},
};

/// Captures a live request as a fixture document.
pub fn record_request<B: AsRef<[u8]>>(request: &Request<B>) -> Document {
    let mut builder = Document::builder()
        .line(SectionId::ReqMethod, request.method().as_str())
        .line(SectionId::ReqPath, request.uri().path());

    if let Some(query) = request.uri().query() {
        builder = builder.line(SectionId::ReqQuery, query);
    }

    let builder = with_headers_and_body(builder, request.headers(), request.body().as_ref());
    builder.build()
}

/// Captures a live response as a fixture document.
pub fn record_response<B: AsRef<[u8]>>(response: &Response<B>) -> Document {
    let builder = Document::builder().line(SectionId::RspCode, response.status().as_str());
    with_headers_and_body(builder, response.headers(), response.body().as_ref()).build()
}

fn with_headers_and_body(
    mut builder: DocumentBuilder,
    headers: &hyper::HeaderMap,
    body: &[u8],
) -> DocumentBuilder {
    let lines = header_lines(headers);
    if !lines.is_empty() {
        builder = builder.section(SectionId::Header, Modifier::None, lines);
    }

    if !body.is_empty() {
        let body = normalize(body);
        builder = builder.section(SectionId::Body, Modifier::None, body.split('\n'));
    }

    builder
}
