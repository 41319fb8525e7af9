//! dictc - a DICT protocol (RFC 2229) dictionary client.
//!
//! One [`DictConnection`] speaks to one dictionary server over one
//! persistent TCP stream: list its databases and matching strategies,
//! look up headwords matching a pattern, and retrieve definitions. The
//! `dictc` binary is a thin command-line front end over this library.

pub mod config;
pub mod error;
pub mod model;
pub mod net;

pub use crate::error::DictError;
pub use crate::model::{Database, Definition, MatchingStrategy};
pub use crate::net::DictConnection;
