//! Line-based codec for tokio.
//!
//! This module provides a codec that reads and writes CRLF-terminated
//! lines as required by RFC 2229.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use crate::error::{self, ProtocolError};
use crate::MAX_LINE_LEN;

/// Line-based codec handling CRLF-terminated DICT protocol lines.
///
/// Decoded lines have the terminator stripped; encoded lines must not
/// contain one and get `\r\n` appended. The decoder is incremental: a
/// line split across several reads is surfaced only once its terminator
/// arrives.
pub struct LineCodec {
    /// Index of next byte to check for newline
    next_index: usize,
    /// Maximum line length
    max_len: usize,
}

impl LineCodec {
    /// Create a new codec with the default maximum line length.
    pub fn new() -> Self {
        Self {
            next_index: 0,
            max_len: MAX_LINE_LEN,
        }
    }

    /// Create a new codec with a custom maximum line length.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
        }
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> error::Result<Option<String>> {
        // Look for newline starting from where we left off
        if let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') {
            // Found a line - extract it
            let line = src.split_to(self.next_index + offset + 1);
            self.next_index = 0;

            if line.len() > self.max_len {
                return Err(ProtocolError::LineTooLong {
                    actual: line.len(),
                    limit: self.max_len,
                });
            }

            let mut data =
                String::from_utf8(line.to_vec()).map_err(|e| ProtocolError::InvalidUtf8 {
                    byte_pos: e.utf8_error().valid_up_to(),
                    details: e.utf8_error().to_string(),
                })?;

            // Strip the terminator: CRLF per the RFC, a bare LF is tolerated.
            if data.ends_with('\n') {
                data.pop();
            }
            if data.ends_with('\r') {
                data.pop();
            }

            Ok(Some(data))
        } else {
            // No complete line yet - remember where we stopped
            self.next_index = src.len();

            // Check if partial line already exceeds limit
            if src.len() > self.max_len {
                return Err(ProtocolError::LineTooLong {
                    actual: src.len(),
                    limit: self.max_len,
                });
            }

            Ok(None)
        }
    }
}

impl Encoder<String> for LineCodec {
    type Error = ProtocolError;

    fn encode(&mut self, line: String, dst: &mut BytesMut) -> error::Result<()> {
        if let Some(ch) = line.chars().find(|&c| c == '\r' || c == '\n') {
            return Err(ProtocolError::IllegalControlChar(ch));
        }

        dst.reserve(line.len() + 2);
        dst.extend_from_slice(line.as_bytes());
        dst.extend_from_slice(b"\r\n");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_complete_line() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::from("220 dict server ready\r\n");

        let result = codec.decode(&mut buf).unwrap();
        assert_eq!(result, Some("220 dict server ready".to_string()));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_decode_partial_line() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::from("220 dict ");

        let result = codec.decode(&mut buf).unwrap();
        assert_eq!(result, None);

        // The rest of the line arrives in a later read
        buf.extend_from_slice(b"server ready\r\n");
        let result = codec.decode(&mut buf).unwrap();
        assert_eq!(result, Some("220 dict server ready".to_string()));
    }

    #[test]
    fn test_decode_bare_lf() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::from("250 ok\n");

        let result = codec.decode(&mut buf).unwrap();
        assert_eq!(result, Some("250 ok".to_string()));
    }

    #[test]
    fn test_decode_too_long() {
        let mut codec = LineCodec::with_max_len(10);
        let mut buf = BytesMut::from("this line is way too long\n");

        let result = codec.decode(&mut buf);
        assert!(matches!(result, Err(ProtocolError::LineTooLong { .. })));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::from(&[b'2', b'5', b'0', b' ', 0xFF, 0xFE, b'\r', b'\n'][..]);

        let result = codec.decode(&mut buf);
        assert!(matches!(result, Err(ProtocolError::InvalidUtf8 { .. })));
    }

    #[test]
    fn test_encode() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::new();

        codec.encode("SHOW DB".to_string(), &mut buf).unwrap();
        assert_eq!(&buf[..], b"SHOW DB\r\n");
    }

    #[test]
    fn test_encode_rejects_embedded_terminator() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::new();

        let result = codec.encode("SHOW\r\nDB".to_string(), &mut buf);
        assert!(matches!(
            result,
            Err(ProtocolError::IllegalControlChar('\r'))
        ));
    }
}
