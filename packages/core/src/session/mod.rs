//! Session layer: one login, one connection, and the state they produce.

pub mod channel;
pub mod credentials;
pub mod error;

pub use channel::{Session, SessionStatus, SessionUpdate, TransportEvent};
pub use credentials::{CredentialStore, Identity};
pub use error::SessionError;
