//! Multi-line text block reading.
//!
//! After a positive preliminary status the server sends data lines
//! terminated by a line holding a single period, doubling the leading
//! period of any body line that starts with one (RFC 2229 section
//! 2.4.2). The terminator line is the only thing that ends a block:
//! TCP is free to split a response across reads and pause in the
//! middle, so "more data buffered" signals are not framing.

use dict_proto::Transport;

use crate::error::{DictError, Result};

/// Lazy reader over one text block.
///
/// Yields body lines with byte-stuffing undone, consumes the terminator
/// without surfacing it, and stays exhausted afterwards. Reading past a
/// peer close before the terminator is a [`DictError::TruncatedResponse`].
pub(crate) struct TextBlock<'a> {
    transport: &'a mut Transport,
    done: bool,
}

impl<'a> TextBlock<'a> {
    pub(crate) fn new(transport: &'a mut Transport) -> Self {
        Self {
            transport,
            done: false,
        }
    }

    /// Next body line, or `Ok(None)` once the terminator was consumed.
    pub(crate) async fn next_line(&mut self) -> Result<Option<String>> {
        if self.done {
            return Ok(None);
        }
        match self.transport.read_line().await? {
            None => Err(DictError::TruncatedResponse),
            Some(line) if line == "." => {
                self.done = true;
                Ok(None)
            }
            // undo byte-stuffing: a doubled leading period loses one
            Some(line) if line.starts_with("..") => Ok(Some(line[1..].to_string())),
            Some(line) => Ok(Some(line)),
        }
    }

    /// Drain the remaining lines into a vector.
    pub(crate) async fn collect(mut self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        while let Some(line) = self.next_line().await? {
            lines.push(line);
        }
        Ok(lines)
    }
}
