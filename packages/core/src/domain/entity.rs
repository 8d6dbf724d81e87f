//! Core domain models for the chat session.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a timeline message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sender {
    /// A named chat participant
    User(String),
    /// The session itself (join notices and similar synthesized entries)
    System,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(name) => write!(f, "{}", name),
            Self::System => write!(f, "system"),
        }
    }
}

/// Kind of a timeline message, used by views to pick a rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Chat text broadcast by the server
    Chat,
    /// Notice synthesized by the session (e.g. a user joining a room)
    System,
}

/// A single immutable chat timeline entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Who sent it
    pub sender: Sender,
    /// Message text
    pub body: String,
    /// When it was sent
    pub sent_at: DateTime<Utc>,
    /// Chat text or synthesized notice
    pub kind: MessageKind,
}

impl Message {
    /// Create a chat message from a named sender
    pub fn chat(
        sender: impl Into<String>,
        body: impl Into<String>,
        sent_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sender: Sender::User(sender.into()),
            body: body.into(),
            sent_at,
            kind: MessageKind::Chat,
        }
    }

    /// Create a synthesized system notice
    pub fn system(body: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            sender: Sender::System,
            body: body.into(),
            sent_at,
            kind: MessageKind::System,
        }
    }
}

/// A chat room as advertised by the server.
///
/// Field names follow the wire encoding of the room directory, so this type
/// deserializes straight out of a directory snapshot payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Room name, unique within the directory
    pub name: String,
    /// When the room was created
    pub created_at: DateTime<Utc>,
    /// Whether joining requires an access check on the server side
    pub is_protected: bool,
    /// Number of members currently in the room
    pub member_count: u32,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_message_chat_constructor() {
        // テスト項目: チャットメッセージを作成できる
        // given (前提条件):
        let sent_at = sample_instant();

        // when (操作):
        let message = Message::chat("alice", "Hello!", sent_at);

        // then (期待する結果):
        assert_eq!(message.sender, Sender::User("alice".to_string()));
        assert_eq!(message.body, "Hello!");
        assert_eq!(message.sent_at, sent_at);
        assert_eq!(message.kind, MessageKind::Chat);
    }

    #[test]
    fn test_message_system_constructor() {
        // テスト項目: システム通知メッセージを作成できる
        // given (前提条件):
        let sent_at = sample_instant();

        // when (操作):
        let message = Message::system("carol has joined the general room", sent_at);

        // then (期待する結果):
        assert_eq!(message.sender, Sender::System);
        assert_eq!(message.body, "carol has joined the general room");
        assert_eq!(message.kind, MessageKind::System);
    }

    #[test]
    fn test_sender_display() {
        // テスト項目: Sender の表示名が正しい
        // given (前提条件):
        let user = Sender::User("alice".to_string());
        let system = Sender::System;

        // then (期待する結果):
        assert_eq!(user.to_string(), "alice");
        assert_eq!(system.to_string(), "system");
    }

    #[test]
    fn test_room_deserializes_from_wire_names() {
        // テスト項目: ルームがワイヤー上のフィールド名からデシリアライズできる
        // given (前提条件):
        let json = r#"{
            "name": "general",
            "createdAt": "2024-05-01T12:00:00Z",
            "isProtected": false,
            "memberCount": 3
        }"#;

        // when (操作):
        let room: Room = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(room.name, "general");
        assert_eq!(room.created_at, sample_instant());
        assert!(!room.is_protected);
        assert_eq!(room.member_count, 3);
    }

    #[test]
    fn test_room_rejects_missing_field() {
        // テスト項目: 必須フィールドが欠けたルームはデシリアライズできない
        // given (前提条件):
        let json = r#"{ "name": "general", "createdAt": "2024-05-01T12:00:00Z" }"#;

        // when (操作):
        let result = serde_json::from_str::<Room>(json);

        // then (期待する結果):
        assert!(result.is_err());
    }
}
