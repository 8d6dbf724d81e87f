//! Terminal chat client for Kaiwa.
//!
//! Wires the session layer up to real I/O: a reqwest login call, a
//! tokio-tungstenite WebSocket, a rustyline prompt thread, and plain
//! terminal rendering. Everything the client knows about chat itself lives
//! in `kaiwa-core`; this crate only moves bytes and prints lines.

pub mod auth;
pub mod command;
pub mod config;
pub mod error;
pub mod input;
pub mod runner;
pub mod transport;
pub mod view;

// Re-export entry points
pub use config::Config;
pub use error::ClientError;
pub use runner::run;
