//! Wire envelope: every frame is a JSON object `{"type": ..., "payload": ...}`.

use serde_json::{Value, json};

use super::error::ProtocolError;

/// Frame type for chat text sent by this client.
pub const SEND_MESSAGE: &str = "send_message";
/// Frame type for chat text broadcast by the server.
pub const NEW_MESSAGE: &str = "new_message";
/// Frame type announcing that some client connected. Informational only.
pub const NEW_CLIENT: &str = "new_client";
/// Frame type requesting creation of a room.
pub const CREATE_ROOM: &str = "create_room";
/// Frame type requesting to move this user into a room.
pub const JOIN_ROOM: &str = "join_room";
/// Frame type carrying a complete room directory snapshot.
pub const REFRESH_ROOMS: &str = "refresh_rooms";
/// Frame type announcing that a user joined a room.
pub const NEW_USER_IN_ROOM: &str = "new_user_in_room";

/// A decoded wire envelope.
///
/// The payload stays untyped here; interpreting it requires knowing the
/// frame type, which is the next stage of the inbound pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub r#type: String,
    pub payload: Value,
}

impl Frame {
    /// Build an envelope from a frame type and an already-encoded payload.
    pub fn new(r#type: impl Into<String>, payload: Value) -> Self {
        Self {
            r#type: r#type.into(),
            payload,
        }
    }

    /// Decode an envelope from wire text.
    ///
    /// # Errors
    ///
    /// * `ProtocolError::MalformedFrame` when the text is not a JSON object
    /// * `ProtocolError::MissingFields` when `type` (a string) or `payload`
    ///   is absent or null
    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| ProtocolError::MalformedFrame {
                reason: e.to_string(),
            })?;
        let Some(object) = value.as_object() else {
            return Err(ProtocolError::MalformedFrame {
                reason: "not a JSON object".to_string(),
            });
        };
        let Some(frame_type) = object.get("type").and_then(Value::as_str) else {
            return Err(ProtocolError::MissingFields);
        };
        let payload = match object.get("payload") {
            Some(payload) if !payload.is_null() => payload.clone(),
            _ => return Err(ProtocolError::MissingFields),
        };
        Ok(Self {
            r#type: frame_type.to_string(),
            payload,
        })
    }

    /// Encode the envelope as wire text.
    pub fn to_wire(&self) -> String {
        json!({
            "type": self.r#type,
            "payload": self.payload,
        })
        .to_string()
    }
}
