//! Framed DICT transport over TCP.
//!
//! Wraps a connected stream in the line codec and exposes the read/write
//! primitives the client builds its request/response cycle on.

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_util::codec::Framed;
use tracing::warn;

use crate::error::{ProtocolError, Result};
use crate::line::LineCodec;
use crate::status::StatusLine;

/// DICT transport over a TCP stream.
///
/// Owns the stream exclusively; dropping the transport closes it. Reads
/// block until a full line is available or the peer closes - callers
/// needing bounded latency wrap individual calls in a timeout.
pub struct Transport {
    framed: Framed<TcpStream, LineCodec>,
}

impl Transport {
    /// Create a new transport from a connected stream.
    pub fn tcp(stream: TcpStream) -> Self {
        if let Err(e) = Self::enable_keepalive(&stream) {
            warn!("failed to enable TCP keepalive: {}", e);
        }

        Self {
            framed: Framed::new(stream, LineCodec::new()),
        }
    }

    fn enable_keepalive(stream: &TcpStream) -> anyhow::Result<()> {
        use socket2::{SockRef, TcpKeepalive};
        use std::time::Duration;

        let sock = SockRef::from(stream);
        let keepalive = TcpKeepalive::new()
            .with_time(Duration::from_secs(120))
            .with_interval(Duration::from_secs(30));

        sock.set_tcp_keepalive(&keepalive)?;
        Ok(())
    }

    /// Send one command line, terminator appended, and flush.
    ///
    /// # Errors
    ///
    /// Any I/O fault, or an embedded line terminator in `line`.
    pub async fn send_line(&mut self, line: &str) -> Result<()> {
        self.framed.send(line.to_string()).await
    }

    /// Read the next line with its terminator stripped.
    ///
    /// Returns `Ok(None)` on a clean end-of-stream.
    pub async fn read_line(&mut self) -> Result<Option<String>> {
        self.framed.next().await.transpose()
    }

    /// Read the next line and parse it as a status line.
    ///
    /// # Errors
    ///
    /// [`ProtocolError::UnexpectedEof`] if the peer closed instead of
    /// replying, or [`ProtocolError::MalformedStatus`] if the line does
    /// not carry a reply code.
    pub async fn read_status(&mut self) -> Result<StatusLine> {
        match self.read_line().await? {
            Some(line) => StatusLine::parse(&line),
            None => Err(ProtocolError::UnexpectedEof),
        }
    }
}
