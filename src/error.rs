//! Unified error handling for dictc.
//!
//! Every variant below means the connection can no longer be trusted and
//! must be closed and discarded by the caller. "Nothing found" outcomes
//! are empty collections returned by the command handlers, never errors.

use dict_proto::ProtocolError;
use thiserror::Error;

/// Errors surfaced to callers of a dictionary connection.
#[derive(Debug, Error)]
pub enum DictError {
    /// The transport could not be established or failed mid-command, the
    /// greeting was refused, or the server answered with an error-class
    /// reply code.
    #[error("connection error: {0}")]
    Connection(String),

    /// A reply line did not match the expected grammar.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The peer closed the stream before a promised response completed.
    #[error("truncated response: stream ended before terminator")]
    TruncatedResponse,

    /// An operation was invoked on a connection that is not ready.
    #[error("invalid state: connection is {0}")]
    InvalidState(&'static str),
}

impl DictError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Connection(_) => "connection_error",
            Self::MalformedResponse(_) => "malformed_response",
            Self::TruncatedResponse => "truncated_response",
            Self::InvalidState(_) => "invalid_state",
        }
    }
}

impl From<ProtocolError> for DictError {
    fn from(err: ProtocolError) -> Self {
        match err {
            ProtocolError::Io(e) => DictError::Connection(e.to_string()),
            ProtocolError::UnexpectedEof => DictError::TruncatedResponse,
            other => DictError::MalformedResponse(other.to_string()),
        }
    }
}

impl From<std::io::Error> for DictError {
    fn from(err: std::io::Error) -> Self {
        DictError::Connection(err.to_string())
    }
}

/// Result type for dictionary operations.
pub type Result<T, E = DictError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DictError::Connection("refused".into()).error_code(),
            "connection_error"
        );
        assert_eq!(DictError::TruncatedResponse.error_code(), "truncated_response");
        assert_eq!(
            DictError::InvalidState("closed").error_code(),
            "invalid_state"
        );
    }

    #[test]
    fn test_protocol_error_mapping() {
        let err: DictError = ProtocolError::UnexpectedEof.into();
        assert!(matches!(err, DictError::TruncatedResponse));

        let err: DictError = ProtocolError::MalformedStatus {
            line: "garbage".into(),
        }
        .into();
        assert!(matches!(err, DictError::MalformedResponse(_)));

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe");
        let err: DictError = ProtocolError::Io(io).into();
        assert!(matches!(err, DictError::Connection(_)));
    }
}
