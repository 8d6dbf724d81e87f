//! Wire protocol: JSON text frames of the form `{"type": ..., "payload": ...}`.
//!
//! Inbound frames pass through a staged pipeline (text, envelope, typed
//! payload) so that each failure mode maps to exactly one
//! [`ProtocolError`] variant. Outbound commands take the reverse path.

pub mod command;
pub mod error;
pub mod event;
pub mod frame;

pub use command::ClientCommand;
pub use error::ProtocolError;
pub use event::{NewMessagePayload, NewUserInRoomPayload, RefreshRoomsPayload, ServerEvent};
pub use frame::Frame;
