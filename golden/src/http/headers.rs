use hyper::{
    HeaderMap,
    header::{HeaderName, HeaderValue},
};

use crate::{
    error::FixtureError,
    section::{Modifier, Section},
};

/// Parses `Name: value` lines. Repeated names keep every value in order.
pub fn parse_header_lines<S: AsRef<str>>(lines: &[S]) -> Result<HeaderMap, FixtureError> {
    let mut headers = HeaderMap::new();

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| FixtureError::InvalidHeader(line.to_string()))?;

        let name = HeaderName::from_bytes(name.trim_end().as_bytes())
            .map_err(|_| FixtureError::InvalidHeader(line.to_string()))?;
        let value = HeaderValue::from_str(value.trim())
            .map_err(|_| FixtureError::InvalidHeader(line.to_string()))?;

        headers.append(name, value);
    }

    Ok(headers)
}

/// Headers of a fixture section. A merge section holds a single header
/// spread over several physical lines.
pub(crate) fn section_headers(section: Option<&Section>) -> Result<HeaderMap, FixtureError> {
    match section {
        None => Ok(HeaderMap::new()),
        Some(section) if section.modifier() == Modifier::Merge => {
            parse_header_lines(&[section.joined()])
        }
        Some(section) => parse_header_lines(section.lines()),
    }
}

/// Renders headers back into `name: value` lines.
pub fn header_lines(headers: &HeaderMap) -> Vec<String> {
    headers
        .iter()
        .map(|(name, value)| format!("{}: {}", name, String::from_utf8_lossy(value.as_bytes())))
        .collect()
}

pub(crate) fn header_values(headers: &HeaderMap, name: &HeaderName) -> Vec<String> {
    headers
        .get_all(name)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .collect()
}
