//! The rendered, transport-ready request.

use std::fmt;

use bytes::Bytes;
use marshal_define::RestMethod;
use percent_encoding::utf8_percent_encode;
use serde::{Serialize, Serializer};

use crate::render::UNRESERVED;

/// An immutable HTTP-level request.
///
/// Produced by [`OperationInput::render`](crate::OperationInput::render);
/// two renders of the same input compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireRequest {
    pub(crate) method: RestMethod,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: Vec<(String, String)>,
    #[serde(serialize_with = "body_text")]
    pub(crate) body: Bytes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) region: Option<String>,
}

fn body_text<S: Serializer>(body: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(body))
}

impl WireRequest {
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Percent-encoded path, always starting with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query pairs in render order, not yet encoded.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Headers in render order: fixed operation headers, then field headers.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Looks up a header value ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Encoded body, empty when the operation sends none.
    ///
    /// JSON bodies are compact `serde_json` output: equal in meaning to other
    /// encoders' output but not always byte-identical, since non-ASCII
    /// characters and `/` are written unescaped (`é`, not `\u00e9`).
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Region carried by the input's `@region` key, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Encoded query string without the leading `?`.
    ///
    /// A pair with an empty value renders as the bare key (`acl`).
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| {
                let key = utf8_percent_encode(key, UNRESERVED);
                if value.is_empty() {
                    key.to_string()
                } else {
                    format!("{key}={}", utf8_percent_encode(value, UNRESERVED))
                }
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Path and query string, as sent on the request line.
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string())
        }
    }
}

impl fmt::Display for WireRequest {
    /// HTTP/1.1-style rendering: request line, headers, blank line, body.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.method, self.target())?;
        for (name, value) in &self.headers {
            writeln!(f, "{name}: {value}")?;
        }
        writeln!(f)?;
        write!(f, "{}", String::from_utf8_lossy(&self.body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> WireRequest {
        WireRequest {
            method: RestMethod::Put,
            path: "/bucket/a/b.txt".to_string(),
            query: vec![
                ("acl".to_string(), String::new()),
                ("versionId".to_string(), "v 1".to_string()),
            ],
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Bytes::from_static(b"{}"),
            region: None,
        }
    }

    #[test]
    fn target_encodes_query() {
        assert_eq!(request().target(), "/bucket/a/b.txt?acl&versionId=v%201");
    }

    #[test]
    fn header_lookup_ignores_case() {
        assert_eq!(request().header("content-type"), Some("application/json"));
        assert!(request().header("accept").is_none());
    }

    #[test]
    fn display_is_request_like() {
        let text = request().to_string();
        assert!(text.starts_with("PUT /bucket/a/b.txt?acl&versionId=v%201\n"));
        assert!(text.ends_with("\n\n{}"));
    }

    #[test]
    fn serializes_body_as_text() {
        let json = serde_json::to_value(request()).unwrap();
        assert_eq!(json["method"], "PUT");
        assert_eq!(json["body"], "{}");
        assert_eq!(json["query"][0][0], "acl");
        assert!(json.get("region").is_none());
    }
}
