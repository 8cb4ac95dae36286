use hyper::{HeaderMap, header::CONTENT_TYPE};
use serde_json::Value;

use crate::error::Mismatch;

/// How a fixture body is compared with a live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyKind {
    #[default]
    Text,
    /// Compared as data: formatting and key order do not matter.
    Json,
}

impl BodyKind {
    pub fn detect(headers: &HeaderMap) -> Self {
        let is_json = headers
            .get_all(CONTENT_TYPE)
            .iter()
            .any(|value| String::from_utf8_lossy(value.as_bytes()).contains("json"));

        if is_json { BodyKind::Json } else { BodyKind::Text }
    }

    pub(crate) fn compare(&self, expected: &str, actual: &[u8]) -> Result<(), Mismatch> {
        let actual = normalize(actual);

        let equal = match self {
            BodyKind::Text => expected == actual,
            BodyKind::Json if expected.trim().is_empty() && actual.trim().is_empty() => true,
            BodyKind::Json => {
                let want: Value = serde_json::from_str(expected)
                    .map_err(|e| Mismatch::Json(format!("fixture body: {e}")))?;
                let got: Value = serde_json::from_str(&actual)
                    .map_err(|e| Mismatch::Json(format!("actual body: {e}")))?;
                want == got
            }
        };

        if equal {
            Ok(())
        } else {
            Err(Mismatch::Body {
                expected: expected.to_string(),
                actual,
            })
        }
    }
}

/// Body text with `\r\n` line endings folded to `\n`.
pub(crate) fn normalize(body: &[u8]) -> String {
    String::from_utf8_lossy(body).replace("\r\n", "\n")
}
