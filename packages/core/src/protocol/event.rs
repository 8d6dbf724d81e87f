//! Server-to-client events decoded from wire frames.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::Room;

use super::error::ProtocolError;
use super::frame::{self, Frame};

/// Payload of a `new_message` frame.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessagePayload {
    pub sender: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

/// Payload of a `refresh_rooms` frame: a complete room directory snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRoomsPayload {
    pub current_room: Room,
    pub active_rooms: Vec<Room>,
}

/// Payload of a `new_user_in_room` frame.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserInRoomPayload {
    pub username: String,
    pub room_name: String,
}

/// A fully validated inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// Chat text broadcast to the current room
    NewMessage(NewMessagePayload),
    /// Some client connected. Carries nothing the session acts on.
    NewClient,
    /// Fresh room directory snapshot
    RefreshRooms(RefreshRoomsPayload),
    /// A user joined a room
    NewUserInRoom(NewUserInRoomPayload),
}

impl ServerEvent {
    /// Decode wire text all the way to a validated event.
    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        Frame::parse(text).and_then(Self::from_frame)
    }

    /// Validate a decoded envelope into a typed event.
    ///
    /// # Errors
    ///
    /// * `ProtocolError::UnsupportedFrame` for frame types this client does
    ///   not understand
    /// * `ProtocolError::InvalidRoomPayload` when a directory snapshot fails
    ///   validation
    /// * `ProtocolError::InvalidPayload` when any other known payload fails
    ///   validation
    pub fn from_frame(frame: Frame) -> Result<Self, ProtocolError> {
        match frame.r#type.as_str() {
            frame::NEW_MESSAGE => serde_json::from_value(frame.payload)
                .map(Self::NewMessage)
                .map_err(|e| ProtocolError::InvalidPayload {
                    frame_type: frame::NEW_MESSAGE.to_string(),
                    reason: e.to_string(),
                }),
            frame::NEW_CLIENT => Ok(Self::NewClient),
            frame::REFRESH_ROOMS => serde_json::from_value(frame.payload)
                .map(Self::RefreshRooms)
                .map_err(|e| ProtocolError::InvalidRoomPayload {
                    reason: e.to_string(),
                }),
            frame::NEW_USER_IN_ROOM => serde_json::from_value(frame.payload)
                .map(Self::NewUserInRoom)
                .map_err(|e| ProtocolError::InvalidPayload {
                    frame_type: frame::NEW_USER_IN_ROOM.to_string(),
                    reason: e.to_string(),
                }),
            other => Err(ProtocolError::UnsupportedFrame {
                frame_type: other.to_string(),
            }),
        }
    }
}
