use std::collections::HashMap;

/// Represents a parsed HTTP request from a control client.
///
/// The method is kept as the raw token from the request line: control
/// endpoints are side-effectful but clients are trusted local tooling, so
/// no verb is rejected and GET/POST reach the same dispatch.
#[derive(Debug, Clone)]
pub struct Request {
    /// Raw method token (e.g. "GET"), not validated
    pub method: String,
    /// The request target as sent by the client (e.g. "/record/start")
    pub target: String,
    /// HTTP version token (typically "HTTP/1.1")
    pub version: String,
    /// Header mapping, keys lower-cased and trimmed, values trimmed
    pub headers: HashMap<String, String>,
    /// Everything after the header terminator
    pub body: Vec<u8>,
}

impl Request {
    /// The request target with a single leading `/` stripped.
    ///
    /// Query strings are not interpreted; a target carrying one simply
    /// fails the exact endpoint match downstream.
    pub fn normalized_path(&self) -> &str {
        self.target.strip_prefix('/').unwrap_or(&self.target)
    }

    /// Case-insensitive header lookup.
    ///
    /// Keys are stored lower-cased by the parser, so any spelling of
    /// `name` finds the trimmed value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|v| v.as_str())
    }
}

/// Builder for constructing Request objects outside the parser.
pub struct RequestBuilder {
    method: String,
    target: String,
    version: String,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl RequestBuilder {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            method: "GET".to_string(),
            target: target.into(),
            version: "HTTP/1.1".to_string(),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Adds a header; the key is folded the same way the parser folds it.
    pub fn header(mut self, key: &str, value: impl Into<String>) -> Self {
        self.headers
            .insert(key.trim().to_ascii_lowercase(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            target: self.target,
            version: self.version,
            headers: self.headers,
            body: self.body,
        }
    }
}
