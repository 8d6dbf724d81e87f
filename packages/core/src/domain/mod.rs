//! Domain layer: chat state owned by the client session.
//!
//! Contains entities (messages, rooms), validated value objects, and the two
//! stateful collections the session maintains: the chat timeline and the
//! room registry.

pub mod entity;
pub mod error;
pub mod registry;
pub mod timeline;
pub mod value_object;

pub use entity::{Message, MessageKind, Room, Sender};
pub use error::ValueObjectError;
pub use registry::RoomRegistry;
pub use timeline::ChatTimeline;
pub use value_object::{OneTimeToken, RoomName, Username};
