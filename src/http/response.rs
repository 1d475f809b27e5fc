/// HTTP status codes the control service can answer with.
///
/// The set is closed: every route resolves to one of these four, so an
/// unknown code cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use ssr_control::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// One outbound HTTP/1.1 message.
///
/// Fixed headers (`Connection: close`, `Content-Length`, CORS) are emitted
/// by the writer, so a response is fully described by status, content type
/// and body. A response is written once and the connection is closed.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a plain-text response with the given status.
    pub fn text(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.into(),
        }
    }

    /// Serializes `value` into a 200 JSON response.
    ///
    /// Endpoint outcomes ride in the JSON envelope, so the HTTP status is
    /// always 200 on this path.
    pub fn json(value: &impl serde::Serialize) -> serde_json::Result<Self> {
        Ok(Self {
            status: StatusCode::Ok,
            content_type: "application/json",
            body: serde_json::to_vec(value)?,
        })
    }

    /// 400 answer for requests the parser rejected.
    pub fn bad_request() -> Self {
        Self::text(StatusCode::BadRequest, "Bad Request")
    }

    /// 404 answer for paths outside the dispatch table.
    pub fn not_found() -> Self {
        Self::text(StatusCode::NotFound, "Not Found")
    }

    /// 500 answer for faults caught at the connection boundary.
    pub fn internal_error() -> Self {
        Self::text(StatusCode::InternalServerError, "Internal Server Error")
    }
}
