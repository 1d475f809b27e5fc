//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 surface for short-lived control clients:
//!
//! - **`connection`**: per-client handler; buffers bytes, serves one
//!   request, closes the socket
//! - **`parser`**: turns the buffered bytes into a [`request::Request`]
//! - **`request`**: parsed request with case-folded headers and the
//!   normalized path the dispatch table matches on
//! - **`response`**: the closed status-code set and response constructors
//! - **`writer`**: serializes responses with the fixed header block
//!   (`Connection: close`, Content-Length, CORS) and writes them out
//!
//! There is no keep-alive, no chunked encoding and no Content-Length
//! handling on requests; every connection carries exactly one request and
//! one response.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
