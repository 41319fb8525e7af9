//! # dict-proto
//!
//! A Rust library for the DICT protocol (RFC 2229): parsing status lines
//! and quoted atoms, classifying numeric reply codes, and framing
//! CRLF-terminated lines over TCP.
//!
//! ## Features
//!
//! - Status-line parsing with 3-digit reply codes
//! - RFC 2229 reply code enumeration with class predicates
//! - Atom tokenizing with double-quoted tokens and backslash escapes
//! - Optional Tokio integration for line-framed networking
//!
//! ## Quick Start
//!
//! ```rust
//! use dict_proto::{split_atoms, Reply, StatusLine};
//!
//! let status = StatusLine::parse("151 \"test\" wn \"WordNet\"").unwrap();
//! assert_eq!(status.code, 151);
//! assert_eq!(status.reply(), Some(Reply::Definition));
//!
//! let atoms = split_atoms(&status.text);
//! assert_eq!(atoms, vec!["test", "wn", "WordNet"]);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod atoms;
pub mod error;
#[cfg(feature = "tokio")]
pub mod line;
pub mod reply;
pub mod status;
#[cfg(feature = "tokio")]
pub mod transport;

pub use self::atoms::{quote_atom, split_atoms};
pub use self::error::ProtocolError;
#[cfg(feature = "tokio")]
pub use self::line::LineCodec;
pub use self::reply::Reply;
pub use self::status::StatusLine;
#[cfg(feature = "tokio")]
pub use self::transport::Transport;

/// Default DICT server port assigned by RFC 2229.
pub const DEFAULT_PORT: u16 = 2628;

/// Maximum accepted line length in bytes, terminator included.
///
/// RFC 2229 limits command lines to 1024 octets; servers in the wild send
/// longer definition text lines, so reads allow a generous multiple.
pub const MAX_LINE_LEN: usize = 8192;
