//! Client runtime error definitions.

use kaiwa_core::session::SessionError;
use thiserror::Error;

/// Top-level client errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured WebSocket endpoint could not be parsed
    #[error("invalid WebSocket URL {url}: {reason}")]
    InvalidWsUrl { url: String, reason: String },

    /// Session lifecycle violation
    #[error(transparent)]
    Session(#[from] SessionError),
}
