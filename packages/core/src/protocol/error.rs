//! Protocol layer error definitions.

use thiserror::Error;

/// Errors from decoding inbound wire frames.
///
/// The variants are deliberately distinct because the session reacts
/// differently to each: frames that were never understood are logged and
/// dropped, while frames that were recognized but rejected produce a
/// user-visible warning.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The text was not a JSON object at all
    #[error("malformed frame: {reason}")]
    MalformedFrame { reason: String },

    /// The envelope lacked its `type` or `payload` field
    #[error("frame is missing its `type` or `payload` field")]
    MissingFields,

    /// The frame type is not one this client understands
    #[error("unsupported frame type: {frame_type}")]
    UnsupportedFrame { frame_type: String },

    /// A known frame type carried a payload that failed validation
    #[error("invalid {frame_type} payload: {reason}")]
    InvalidPayload { frame_type: String, reason: String },

    /// A room directory snapshot failed validation; the snapshot is rejected
    /// as a whole
    #[error("invalid room directory payload: {reason}")]
    InvalidRoomPayload { reason: String },
}
