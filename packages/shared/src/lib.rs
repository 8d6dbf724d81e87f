//! Shared utilities for the Kaiwa workspace.
//!
//! Keeps the pieces every binary needs (logger bootstrap, wall-clock helpers)
//! out of the session and client crates.

pub mod logger;
pub mod time;

pub use logger::setup_logger;
