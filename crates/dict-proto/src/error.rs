//! Error types for the DICT protocol library.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Protocol-level errors raised while framing or parsing reply lines.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A reply line contained invalid UTF-8.
    #[error("invalid UTF-8 in line at byte {byte_pos}: {details}")]
    InvalidUtf8 {
        /// Byte position where UTF-8 validation failed.
        byte_pos: usize,
        /// Detailed error message from the UTF-8 decoder.
        details: String,
    },

    /// A line exceeded the maximum allowed length.
    #[error("line too long: {actual} bytes (limit: {limit})")]
    LineTooLong {
        /// Actual line length.
        actual: usize,
        /// Maximum allowed length.
        limit: usize,
    },

    /// An outgoing command contained an embedded line terminator.
    #[error("illegal control character in command: {0:?}")]
    IllegalControlChar(char),

    /// A line did not conform to the status-line grammar.
    #[error("malformed status line: {line:?}")]
    MalformedStatus {
        /// The offending line.
        line: String,
    },

    /// The peer closed the stream where a reply line was required.
    #[error("connection closed where a reply line was required")]
    UnexpectedEof,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProtocolError::LineTooLong {
            actual: 10000,
            limit: 8192,
        };
        assert_eq!(
            format!("{}", err),
            "line too long: 10000 bytes (limit: 8192)"
        );

        let err = ProtocolError::MalformedStatus {
            line: "hello".to_string(),
        };
        assert_eq!(format!("{}", err), "malformed status line: \"hello\"");
    }

    #[test]
    fn test_error_conversion() {
        let io_err =
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let protocol_err: ProtocolError = io_err.into();

        match protocol_err {
            ProtocolError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }
}
