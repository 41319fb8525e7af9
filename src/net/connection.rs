//! The dictionary connection: lifecycle and command handlers.
//!
//! One connection speaks to one server over one TCP stream. The DICT
//! protocol is half-duplex request/response, so every public operation
//! holds the connection lock for its full duration and concurrent
//! callers are serialized. No operation carries an internal timeout;
//! callers needing bounded latency wrap calls in one externally.

use std::collections::HashMap;

use dict_proto::{quote_atom, split_atoms, Reply, StatusLine, Transport, DEFAULT_PORT};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tracing::{debug, trace};

use crate::error::{DictError, Result};
use crate::model::{Database, Definition, MatchingStrategy};
use crate::net::block::TextBlock;

enum State {
    Ready(Transport),
    Closed,
}

/// A client connection to a DICT server.
///
/// Construction performs the greeting handshake; the connection is ready
/// for commands afterwards and stays usable until [`close`] or the first
/// error. Any returned error means the connection must be closed and
/// discarded: "nothing found" outcomes are empty collections, never
/// errors.
///
/// [`close`]: DictConnection::close
pub struct DictConnection {
    state: Mutex<State>,
}

impl DictConnection {
    /// Connect to a DICT server on the default port.
    ///
    /// # Errors
    ///
    /// [`DictError::Connection`] if the transport cannot be established
    /// or the greeting is missing, malformed, or negative.
    pub async fn connect(host: &str) -> Result<Self> {
        Self::connect_with_port(host, DEFAULT_PORT).await
    }

    /// Connect to a DICT server on an explicit port.
    ///
    /// # Errors
    ///
    /// See [`connect`](DictConnection::connect).
    pub async fn connect_with_port(host: &str, port: u16) -> Result<Self> {
        let stream = TcpStream::connect((host, port))
            .await
            .map_err(|e| DictError::Connection(format!("{host}:{port}: {e}")))?;
        let mut transport = Transport::tcp(stream);

        // The server opens with exactly one status line; only a 2xx
        // banner makes the connection usable.
        let greeting = transport
            .read_status()
            .await
            .map_err(|e| DictError::Connection(format!("greeting: {e}")))?;
        if !greeting.is_completion() {
            return Err(DictError::Connection(format!(
                "server refused connection: {} {}",
                greeting.code, greeting.text
            )));
        }
        debug!(host, port, code = greeting.code, "connected");

        Ok(Self {
            state: Mutex::new(State::Ready(transport)),
        })
    }

    /// List the databases currently present on the server, keyed by
    /// name.
    ///
    /// Returns an empty map when the server reports none.
    pub async fn databases(&self) -> Result<HashMap<String, Database>> {
        let mut state = self.state.lock().await;
        let transport = Self::ready(&mut state)?;

        transport.send_line("SHOW DB").await?;
        let status = transport.read_status().await?;
        trace!(code = status.code, "SHOW DB reply");

        let mut databases = HashMap::new();
        match status.reply() {
            Some(Reply::NoDatabases) => return Ok(databases),
            Some(Reply::DatabasesPresent) => {}
            _ => return Err(Self::unexpected("SHOW DB", &status)),
        }

        let mut block = TextBlock::new(&mut *transport);
        while let Some(line) = block.next_line().await? {
            let (name, description) = Self::name_description(&line)?;
            databases.insert(name.clone(), Database::new(name, description));
        }
        Self::expect_completion(transport, "SHOW DB").await?;

        Ok(databases)
    }

    /// List the matching strategies the server supports, in the order
    /// the server advertises them, deduplicated by name.
    ///
    /// Returns an empty collection when the server reports none.
    pub async fn strategies(&self) -> Result<Vec<MatchingStrategy>> {
        let mut state = self.state.lock().await;
        let transport = Self::ready(&mut state)?;

        transport.send_line("SHOW STRAT").await?;
        let status = transport.read_status().await?;
        trace!(code = status.code, "SHOW STRAT reply");

        let mut strategies: Vec<MatchingStrategy> = Vec::new();
        match status.reply() {
            Some(Reply::NoStrategies) => return Ok(strategies),
            Some(Reply::StrategiesAvailable) => {}
            _ => return Err(Self::unexpected("SHOW STRAT", &status)),
        }

        let mut block = TextBlock::new(&mut *transport);
        while let Some(line) = block.next_line().await? {
            let (name, description) = Self::name_description(&line)?;
            if strategies.iter().all(|s| s.name() != name) {
                strategies.push(MatchingStrategy::new(name, description));
            }
        }
        Self::expect_completion(transport, "SHOW STRAT").await?;

        Ok(strategies)
    }

    /// Look up headwords matching a pattern, in server order,
    /// deduplicated.
    ///
    /// The sentinel databases ([`Database::any`],
    /// [`Database::first_match`]) and strategy
    /// ([`MatchingStrategy::server_default`]) are accepted. Returns an
    /// empty collection when nothing matches; an unsupported database or
    /// strategy is a [`DictError::Connection`].
    pub async fn match_words(
        &self,
        pattern: &str,
        strategy: &MatchingStrategy,
        database: &Database,
    ) -> Result<Vec<String>> {
        let mut state = self.state.lock().await;
        let transport = Self::ready(&mut state)?;

        let command = format!(
            "MATCH {} {} {}",
            database.name(),
            strategy.name(),
            quote_atom(pattern)
        );
        transport.send_line(&command).await?;
        let status = transport.read_status().await?;
        trace!(code = status.code, "MATCH reply");

        let mut words: Vec<String> = Vec::new();
        match status.reply() {
            Some(Reply::NoMatch) => return Ok(words),
            Some(Reply::MatchesFound) => {}
            _ => return Err(Self::unexpected("MATCH", &status)),
        }

        let mut block = TextBlock::new(&mut *transport);
        while let Some(line) = block.next_line().await? {
            // each match line is: database headword
            let mut atoms = split_atoms(&line).into_iter();
            let headword = match (atoms.next(), atoms.next()) {
                (Some(_database), Some(headword)) => headword,
                _ => {
                    return Err(DictError::MalformedResponse(format!(
                        "expected database and headword: {line:?}"
                    )));
                }
            };
            if !words.contains(&headword) {
                words.push(headword);
            }
        }
        Self::expect_completion(transport, "MATCH").await?;

        Ok(words)
    }

    /// Retrieve all definitions for a word.
    ///
    /// Each definition marker names the headword and source database;
    /// its body follows immediately as one text block, and the two
    /// alternate strictly until the final completion status. Returns an
    /// empty collection when the word is not defined; an unsupported
    /// database is a [`DictError::Connection`].
    pub async fn definitions(&self, word: &str, database: &Database) -> Result<Vec<Definition>> {
        let mut state = self.state.lock().await;
        let transport = Self::ready(&mut state)?;

        let command = format!("DEFINE {} {}", database.name(), quote_atom(word));
        transport.send_line(&command).await?;
        let status = transport.read_status().await?;
        trace!(code = status.code, "DEFINE reply");

        let mut definitions = Vec::new();
        match status.reply() {
            Some(Reply::NoMatch) => return Ok(definitions),
            Some(Reply::DefinitionsFound) => {}
            _ => return Err(Self::unexpected("DEFINE", &status)),
        }

        loop {
            let status = transport.read_status().await?;
            match status.reply() {
                Some(Reply::Definition) => {
                    let mut atoms = split_atoms(&status.text).into_iter();
                    let (headword, source) = match (atoms.next(), atoms.next()) {
                        (Some(headword), Some(source)) => (headword, source),
                        _ => {
                            return Err(DictError::MalformedResponse(format!(
                                "definition marker without headword and database: {} {}",
                                status.code, status.text
                            )));
                        }
                    };
                    // the terminator consumed by the block is the only
                    // protocol artifact; the body is stored verbatim
                    let body = TextBlock::new(&mut *transport).collect().await?.join("\n");
                    definitions.push(Definition::new(headword, source, body));
                }
                _ if status.is_completion() => break,
                _ => return Err(Self::unexpected("DEFINE", &status)),
            }
        }

        debug!(word, count = definitions.len(), "definitions retrieved");
        Ok(definitions)
    }

    /// Close the connection.
    ///
    /// Sends `QUIT`, attempts to read its reply, and releases the
    /// stream. Best-effort: shutdown failures are swallowed and closing
    /// twice is a quiet no-op.
    pub async fn close(&self) {
        let mut state = self.state.lock().await;
        if let State::Ready(transport) = &mut *state {
            if transport.send_line("QUIT").await.is_ok() {
                let _ = transport.read_line().await;
            }
            debug!("connection closed");
        }
        *state = State::Closed;
    }

    fn ready(state: &mut State) -> Result<&mut Transport> {
        match state {
            State::Ready(transport) => Ok(transport),
            State::Closed => Err(DictError::InvalidState("closed")),
        }
    }

    /// Tokenize a listing line into its (name, description) pair.
    fn name_description(line: &str) -> Result<(String, String)> {
        let mut atoms = split_atoms(line).into_iter();
        match (atoms.next(), atoms.next()) {
            (Some(name), Some(description)) => Ok((name, description)),
            _ => Err(DictError::MalformedResponse(format!(
                "expected name and description: {line:?}"
            ))),
        }
    }

    /// Read the final status after a block and require a 2xx completion.
    async fn expect_completion(transport: &mut Transport, command: &str) -> Result<()> {
        let status = transport.read_status().await?;
        if status.is_completion() {
            Ok(())
        } else {
            Err(Self::unexpected(command, &status))
        }
    }

    /// Map a status the grammar does not allow here to the error
    /// taxonomy: error-class replies are connection errors, anything
    /// else is a malformed response.
    fn unexpected(command: &str, status: &StatusLine) -> DictError {
        if status.is_negative() {
            DictError::Connection(format!(
                "{command} rejected: {} {}",
                status.code, status.text
            ))
        } else {
            DictError::MalformedResponse(format!(
                "unexpected reply to {command}: {} {}",
                status.code, status.text
            ))
        }
    }
}
