//! Login boundary: exchanging credentials for a connection identity.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Username;
use crate::session::Identity;

/// Errors from the login exchange
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The server answered and refused the credentials
    #[error("login rejected by server (status {status})")]
    Rejected { status: u16 },

    /// The login request never completed
    #[error("login request failed: {reason}")]
    Network { reason: String },

    /// The server answered with something other than a usable token
    #[error("malformed login response: {reason}")]
    MalformedResponse { reason: String },
}

/// Exchanges credentials for an [`Identity`] holding a one-time connection
/// token.
///
/// The password is used for the exchange and never stored anywhere.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Perform the login exchange.
    async fn authenticate(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<Identity, AuthError>;
}
