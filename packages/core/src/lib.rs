//! Client session layer for the Kaiwa chat system.
//!
//! Everything a chat frontend needs short of I/O: the connection state
//! machine ([`session`]), the JSON wire codec ([`protocol`]), the chat state
//! it maintains ([`domain`]), and the login boundary ([`auth`]). Transports
//! and UIs plug in at the edges. The session itself is synchronous and
//! deterministic, so a whole connection lifecycle can be driven in tests
//! without a server.

pub mod auth;
pub mod domain;
pub mod protocol;
pub mod session;

// Re-export the session entry points
pub use session::{Session, SessionStatus, SessionUpdate, TransportEvent};
