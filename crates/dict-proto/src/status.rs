//! Status line parsing.
//!
//! Every DICT reply opens with a status line: a 3-digit code, a space,
//! and free-form text whose shape depends on the code.

use crate::error::{ProtocolError, Result};
use crate::reply::Reply;

/// One parsed status line.
///
/// Transient: a handler reads it, inspects the code, and moves on. The
/// text is kept verbatim so code-specific grammars (for example
/// the quoted fields of a 151 definition marker) can be tokenized by the
/// caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    /// The 3-digit reply code.
    pub code: u16,
    /// The remainder of the line, with the separating space stripped.
    pub text: String,
}

impl StatusLine {
    /// Parse one reply line into code and text.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MalformedStatus`] if the line is shorter
    /// than 4 characters, does not start with 3 ASCII digits, or the
    /// digits are not followed by a space.
    pub fn parse(line: &str) -> Result<Self> {
        let bytes = line.as_bytes();
        if bytes.len() < 4
            || !bytes[..3].iter().all(u8::is_ascii_digit)
            || bytes[3] != b' '
        {
            return Err(ProtocolError::MalformedStatus {
                line: line.to_string(),
            });
        }

        let code = u16::from(bytes[0] - b'0') * 100
            + u16::from(bytes[1] - b'0') * 10
            + u16::from(bytes[2] - b'0');

        Ok(Self {
            code,
            text: line[4..].to_string(),
        })
    }

    /// The known [`Reply`] for this code, if any.
    #[inline]
    pub fn reply(&self) -> Option<Reply> {
        Reply::from_code(self.code)
    }

    /// Check if this is a positive preliminary status (1xx, a text block follows).
    #[inline]
    pub fn is_preliminary(&self) -> bool {
        (100..200).contains(&self.code)
    }

    /// Check if this is a positive completion status (2xx).
    #[inline]
    pub fn is_completion(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// Check if this is a negative status (4xx or 5xx).
    #[inline]
    pub fn is_negative(&self) -> bool {
        (400..600).contains(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_greeting() {
        let status = StatusLine::parse("220 test dict server ready").unwrap();
        assert_eq!(status.code, 220);
        assert_eq!(status.text, "test dict server ready");
        assert_eq!(status.reply(), Some(Reply::Banner));
        assert!(status.is_completion());
    }

    #[test]
    fn test_parse_preliminary() {
        let status = StatusLine::parse("110 2 databases present").unwrap();
        assert_eq!(status.code, 110);
        assert_eq!(status.text, "2 databases present");
        assert!(status.is_preliminary());
        assert!(!status.is_negative());
    }

    #[test]
    fn test_parse_negative() {
        let status = StatusLine::parse("550 invalid database").unwrap();
        assert!(status.is_negative());
        assert_eq!(status.reply(), Some(Reply::InvalidDatabase));
    }

    #[test]
    fn test_parse_unknown_code() {
        let status = StatusLine::parse("299 something nonstandard").unwrap();
        assert_eq!(status.code, 299);
        assert_eq!(status.reply(), None);
        assert!(status.is_completion());
    }

    #[test]
    fn test_reject_short_line() {
        assert!(matches!(
            StatusLine::parse("25"),
            Err(ProtocolError::MalformedStatus { .. })
        ));
        assert!(matches!(
            StatusLine::parse("250"),
            Err(ProtocolError::MalformedStatus { .. })
        ));
    }

    #[test]
    fn test_reject_non_digits() {
        assert!(matches!(
            StatusLine::parse("hello world"),
            Err(ProtocolError::MalformedStatus { .. })
        ));
        assert!(matches!(
            StatusLine::parse("2x0 ok"),
            Err(ProtocolError::MalformedStatus { .. })
        ));
    }

    #[test]
    fn test_reject_missing_separator() {
        assert!(matches!(
            StatusLine::parse("250ok"),
            Err(ProtocolError::MalformedStatus { .. })
        ));
    }
}
