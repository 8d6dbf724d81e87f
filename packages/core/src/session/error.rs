//! Session layer error definitions.

use thiserror::Error;

use super::channel::SessionStatus;

/// Errors from session lifecycle operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// connect() was called while a connection is being established or open
    #[error("session already active (status: {status:?})")]
    AlreadyActive { status: SessionStatus },
}
