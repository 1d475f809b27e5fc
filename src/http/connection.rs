use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, error, info, warn};

use crate::api::routes;
use crate::controller::ControllerHandle;
use crate::http::parser::{find_headers_end, parse_request};
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// One accepted control client.
///
/// A connection serves exactly one request: bytes are accumulated until the
/// header terminator appears, the snapshot is parsed and dispatched, the
/// response is written, and the socket is closed (`Connection: close`).
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    controller: ControllerHandle,
}

impl Connection {
    pub fn new(stream: TcpStream, controller: ControllerHandle) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            controller,
        }
    }

    /// Runs the connection to completion.
    ///
    /// Parse failures answer 400, dispatch faults answer 500; neither is an
    /// error of the connection itself. Only socket-level failures propagate.
    pub async fn serve(mut self) -> anyhow::Result<()> {
        let Some(raw) = self.read_request().await? else {
            debug!("peer closed before a complete request");
            return Ok(());
        };

        let response = match parse_request(&raw) {
            Ok(req) => {
                info!(method = %req.method, target = %req.target, "request");
                match routes::dispatch(&req, &self.controller) {
                    Ok(resp) => resp,
                    Err(e) => {
                        error!(error = %e, "dispatch failed");
                        Response::internal_error()
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "malformed request");
                Response::bad_request()
            }
        };

        let mut writer = ResponseWriter::new(&response);
        if let Err(e) = writer.write_to_stream(&mut self.stream).await {
            warn!(error = %e, "failed to write response");
        }
        let _ = self.stream.shutdown().await;

        Ok(())
    }

    /// Accumulates bytes until the buffer contains `\r\n\r\n`.
    ///
    /// Returns the buffered bytes and leaves the buffer cleared, or `None`
    /// when the peer closes first. No timeout is applied: a client that
    /// never completes a request holds its connection until it hangs up or
    /// the server stops.
    async fn read_request(&mut self) -> anyhow::Result<Option<Bytes>> {
        loop {
            if find_headers_end(&self.buffer).is_some() {
                return Ok(Some(self.buffer.split().freeze()));
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;
            if n == 0 {
                return Ok(None);
            }
        }
    }
}
