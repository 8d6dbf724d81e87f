//! Client-to-server commands and their wire encoding.

use serde_json::json;

use crate::domain::{RoomName, Username};

use super::frame::{self, Frame};

/// An outbound request this client can put on the wire.
///
/// Commands are fire-and-forget: the protocol carries no acknowledgements
/// and no correlation identifiers, so the effect of a command only ever
/// shows up as later broadcast frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// Chat text for the room this user currently sits in
    SendMessage { from: String, message: String },
    /// Request to create a room (the server moves the creator into it)
    CreateRoom { name: String, created_by: String },
    /// Request to move this user into another room
    JoinRoom { room_name: String, username: String },
}

impl ClientCommand {
    /// Chat text command from a validated sender.
    pub fn send_message(from: &Username, message: impl Into<String>) -> Self {
        Self::SendMessage {
            from: from.as_str().to_string(),
            message: message.into(),
        }
    }

    /// Room creation command from a validated name and creator.
    pub fn create_room(name: &RoomName, created_by: &Username) -> Self {
        Self::CreateRoom {
            name: name.as_str().to_string(),
            created_by: created_by.as_str().to_string(),
        }
    }

    /// Room join command from a validated name and user.
    pub fn join_room(room_name: &RoomName, username: &Username) -> Self {
        Self::JoinRoom {
            room_name: room_name.as_str().to_string(),
            username: username.as_str().to_string(),
        }
    }

    /// Wire frame type for this command.
    pub fn frame_type(&self) -> &'static str {
        match self {
            Self::SendMessage { .. } => frame::SEND_MESSAGE,
            Self::CreateRoom { .. } => frame::CREATE_ROOM,
            Self::JoinRoom { .. } => frame::JOIN_ROOM,
        }
    }

    /// Build the wire envelope for this command.
    pub fn to_frame(&self) -> Frame {
        let payload = match self {
            Self::SendMessage { from, message } => json!({
                "from": from,
                "message": message,
            }),
            Self::CreateRoom { name, created_by } => json!({
                "name": name,
                "createdBy": created_by,
            }),
            Self::JoinRoom { room_name, username } => json!({
                "roomName": room_name,
                "username": username,
            }),
        };
        Frame::new(self.frame_type(), payload)
    }

    /// Encode this command as wire text.
    pub fn to_wire(&self) -> String {
        self.to_frame().to_wire()
    }
}
