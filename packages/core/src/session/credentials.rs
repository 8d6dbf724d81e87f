//! Login identity and its in-memory store.

use crate::domain::{OneTimeToken, Username};

/// Authenticated identity: the username plus the one-time token minted for
/// it at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    username: Username,
    token: OneTimeToken,
}

impl Identity {
    /// Create an identity from a validated username and token.
    pub fn new(username: Username, token: OneTimeToken) -> Self {
        Self { username, token }
    }

    /// The name this user logs in with.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// The one-time connection token.
    pub fn token(&self) -> &OneTimeToken {
        &self.token
    }
}

/// Single-slot store for the active identity.
///
/// Tokens are single-use and the server keeps no client session across
/// connections, so nothing here is ever persisted. Storing a new identity
/// overwrites the previous one; clearing wipes the slot when the session is
/// invalidated.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    identity: Option<Identity>,
}

impl CredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an identity, replacing any previous one.
    pub fn store(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    /// The active identity, if one is stored.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Whether an identity is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Wipe the stored identity.
    pub fn clear(&mut self) {
        self.identity = None;
    }
}
