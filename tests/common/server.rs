//! Scripted mock DICT server.
//!
//! Binds an ephemeral port, serves exactly one connection, and walks a
//! fixed script: greeting first, then for each exchange it reads one
//! client command, asserts it, and writes the canned reply lines. When
//! the script runs out the stream is dropped, so a client reading past
//! the script sees end-of-stream.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// One scripted exchange: the exact command line the client must send
/// next, and the reply lines (terminators appended) it gets back.
pub struct Exchange {
    pub expect: &'static str,
    pub reply: &'static [&'static str],
}

/// A mock DICT server bound to an ephemeral port.
pub struct MockServer {
    addr: std::net::SocketAddr,
    handle: JoinHandle<()>,
}

impl MockServer {
    /// Spawn a server that greets with `greeting` and then follows
    /// `script`.
    pub async fn spawn(greeting: &'static str, script: Vec<Exchange>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (stream, _peer) = listener.accept().await.unwrap();
            let (read_half, mut write_half) = stream.into_split();
            let mut reader = BufReader::new(read_half);

            write_half
                .write_all(format!("{greeting}\r\n").as_bytes())
                .await
                .unwrap();
            write_half.flush().await.unwrap();

            for exchange in script {
                let mut line = String::new();
                let read = reader.read_line(&mut line).await.unwrap();
                assert!(
                    read > 0,
                    "client closed before sending {:?}",
                    exchange.expect
                );
                assert_eq!(line.trim_end(), exchange.expect, "unexpected client command");

                for reply in exchange.reply {
                    write_half
                        .write_all(format!("{reply}\r\n").as_bytes())
                        .await
                        .unwrap();
                }
                write_half.flush().await.unwrap();
            }
        });

        Self { addr, handle }
    }

    /// Host to connect to.
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Port to connect to.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Wait for the server task, surfacing its assertion failures.
    pub async fn finished(self) {
        self.handle.await.expect("mock server task failed");
    }
}
