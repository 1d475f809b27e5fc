use crate::http::request::Request;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The buffer does not yet contain the header terminator
    Incomplete,
    /// The request line has fewer than three tokens
    InvalidRequestLine,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Incomplete => write!(f, "request is incomplete"),
            ParseError::InvalidRequestLine => write!(f, "invalid request line"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses one control request out of `buf`.
///
/// `buf` must contain the `\r\n\r\n` header terminator; everything after it
/// is taken as the body. Content-Length and chunked encoding are not
/// interpreted: one request per connection, and the connection is closed
/// after the response.
///
/// Header lines are split at the first `:`, keys trimmed and lower-cased,
/// values trimmed. Lines without a `:` are skipped rather than rejected.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let head = String::from_utf8_lossy(&buf[..headers_end]);
    let body = buf[headers_end + 4..].to_vec();

    let mut lines = head.split("\r\n");

    // Request line: METHOD SP TARGET SP VERSION, method accepted verbatim
    let request_line = lines.next().ok_or(ParseError::InvalidRequestLine)?;
    let tokens: Vec<&str> = request_line.split(' ').collect();
    if tokens.len() < 3 {
        return Err(ParseError::InvalidRequestLine);
    }

    let mut headers = HashMap::new();
    for line in lines {
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            headers.insert(
                key.trim().to_ascii_lowercase(),
                value.trim().to_string(),
            );
        }
    }

    Ok(Request {
        method: tokens[0].to_string(),
        target: tokens[1].to_string(),
        version: tokens[2].to_string(),
        headers,
        body,
    })
}

/// Offset of the first `\r\n\r\n` in `buf`, if any.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET /status HTTP/1.1\r\nHost: localhost\r\n\r\n";

        let parsed = parse_request(req).unwrap();

        assert_eq!(parsed.method, "GET");
        assert_eq!(parsed.target, "/status");
        assert_eq!(parsed.normalized_path(), "status");
        assert_eq!(parsed.headers.get("host").unwrap(), "localhost");
    }
}
