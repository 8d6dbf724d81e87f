//! Connection session state machine.
//!
//! The session owns all client-side chat state (credentials, timeline, room
//! registry) and advances by consuming one transport event at a time. It
//! performs no I/O itself: a driver feeds [`TransportEvent`]s in and renders
//! the returned [`SessionUpdate`]s, which keeps every state transition
//! serialized and lets the whole lifecycle run in tests without a server.

use kaiwa_shared::time::now_utc;

use crate::domain::{ChatTimeline, Message, RoomRegistry};
use crate::protocol::{ClientCommand, ProtocolError, ServerEvent};

use super::credentials::{CredentialStore, Identity};
use super::error::SessionError;

/// Connection lifecycle phase.
///
/// The lifecycle moves strictly forward: `Disconnected` to `Connecting` to
/// `Connected` to `Closed`. There is no reconnect edge; once closed, a new
/// login produces a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// No connection, none requested
    #[default]
    Disconnected,
    /// Connection requested, waiting for the transport to open
    Connecting,
    /// Transport open, frames flow
    Connected,
    /// Transport gone, session state wiped
    Closed,
}

/// What the transport observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// The connection finished opening
    Opened,
    /// One text frame arrived
    Frame(String),
    /// The connection closed, or never managed to open
    Closed,
}

/// A state change the driver should surface to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    /// The session reached Connected
    Connected,
    /// A message was appended to the timeline
    MessageAppended,
    /// The room registry was replaced with a fresh snapshot
    RoomsRefreshed,
    /// A frame was recognized but rejected; worth telling the user about
    Warning(ProtocolError),
    /// The session was invalidated and all of its state cleared
    Invalidated,
}

/// Client session: one login, one connection, no reconnects.
///
/// All state behind this struct changes only inside [`Session::connect`] and
/// [`Session::handle`], so a driver that calls them from a single task gets
/// strict ordering for free.
#[derive(Debug, Default)]
pub struct Session {
    status: SessionStatus,
    credentials: CredentialStore,
    timeline: ChatTimeline,
    rooms: RoomRegistry,
}

impl Session {
    /// Create a session with no connection and no state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle phase.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Identity of the logged-in user, while one is active.
    pub fn identity(&self) -> Option<&Identity> {
        self.credentials.identity()
    }

    /// Chat history received during this session.
    pub fn timeline(&self) -> &ChatTimeline {
        &self.timeline
    }

    /// Room directory as of the latest snapshot.
    pub fn rooms(&self) -> &RoomRegistry {
        &self.rooms
    }

    /// Begin a connection attempt with a fresh login identity.
    ///
    /// The session records the identity and moves to `Connecting`; actually
    /// opening the transport is the driver's job. An attempt that never
    /// opens stays in `Connecting` until the transport reports `Closed`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyActive` when a connection is already
    /// being established or open.
    pub fn connect(&mut self, identity: Identity) -> Result<(), SessionError> {
        match self.status {
            SessionStatus::Disconnected | SessionStatus::Closed => {
                self.credentials.store(identity);
                self.timeline.clear();
                self.rooms.clear();
                self.status = SessionStatus::Connecting;
                Ok(())
            }
            status @ (SessionStatus::Connecting | SessionStatus::Connected) => {
                Err(SessionError::AlreadyActive { status })
            }
        }
    }

    /// Consume one transport event and return the updates it caused.
    ///
    /// Updates come back in the order they should be rendered. An empty
    /// vector means the event changed nothing worth showing.
    pub fn handle(&mut self, event: TransportEvent) -> Vec<SessionUpdate> {
        match event {
            TransportEvent::Opened => self.handle_opened(),
            TransportEvent::Frame(text) => self.handle_frame(&text),
            TransportEvent::Closed => self.invalidate(),
        }
    }

    /// Encode a command for the wire, if the session is in a state to send.
    ///
    /// Anything but `Connected` drops the command with a log line and
    /// returns `None`; commands are never queued for later delivery.
    pub fn send(&self, command: &ClientCommand) -> Option<String> {
        if self.status != SessionStatus::Connected {
            tracing::warn!(
                "dropping {} command while session is {:?}",
                command.frame_type(),
                self.status
            );
            return None;
        }
        Some(command.to_wire())
    }

    fn handle_opened(&mut self) -> Vec<SessionUpdate> {
        match self.status {
            SessionStatus::Connecting => {
                self.status = SessionStatus::Connected;
                vec![SessionUpdate::Connected]
            }
            status => {
                tracing::warn!("transport opened while session is {:?}; ignoring", status);
                vec![]
            }
        }
    }

    fn handle_frame(&mut self, text: &str) -> Vec<SessionUpdate> {
        if self.status != SessionStatus::Connected {
            tracing::warn!("frame received while session is {:?}; dropping", self.status);
            return vec![];
        }
        match ServerEvent::parse(text) {
            Ok(event) => self.apply(event),
            Err(error @ (ProtocolError::MalformedFrame { .. } | ProtocolError::MissingFields)) => {
                // Never understood at all. Not worth interrupting the user.
                tracing::warn!("dropping frame: {}", error);
                vec![]
            }
            Err(error) => {
                tracing::warn!("rejecting frame: {}", error);
                vec![SessionUpdate::Warning(error)]
            }
        }
    }

    fn apply(&mut self, event: ServerEvent) -> Vec<SessionUpdate> {
        match event {
            ServerEvent::NewMessage(payload) => {
                self.timeline
                    .append(Message::chat(payload.sender, payload.body, payload.sent_at));
                vec![SessionUpdate::MessageAppended]
            }
            ServerEvent::NewClient => {
                tracing::debug!("new_client notice received");
                vec![]
            }
            ServerEvent::RefreshRooms(payload) => {
                self.rooms
                    .replace_all(payload.current_room, payload.active_rooms);
                vec![SessionUpdate::RoomsRefreshed]
            }
            ServerEvent::NewUserInRoom(payload) => {
                let body = format!(
                    "{} has joined the {} room",
                    payload.username, payload.room_name
                );
                self.timeline.append(Message::system(body, now_utc()));
                vec![SessionUpdate::MessageAppended]
            }
        }
    }

    /// Tear the session down: credentials, timeline, and rooms all go.
    fn invalidate(&mut self) -> Vec<SessionUpdate> {
        match self.status {
            SessionStatus::Connecting | SessionStatus::Connected => {
                self.credentials.clear();
                self.timeline.clear();
                self.rooms.clear();
                self.status = SessionStatus::Closed;
                vec![SessionUpdate::Invalidated]
            }
            status => {
                tracing::debug!("transport closed while session is {:?}; nothing to do", status);
                vec![]
            }
        }
    }
}
