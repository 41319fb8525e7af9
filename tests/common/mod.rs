//! Integration test common infrastructure.
//!
//! Provides a scripted in-process DICT server for exercising the client
//! against canned protocol exchanges.

pub mod server;

#[allow(unused_imports)]
pub use server::{Exchange, MockServer};
