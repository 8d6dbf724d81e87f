//! Room registry replaced wholesale on every directory refresh.

use super::entity::Room;

/// The set of rooms the server currently advertises, plus which one this
/// session sits in.
///
/// The server periodically pushes a complete directory snapshot; the
/// registry replaces its entire contents with each snapshot instead of
/// patching entries. The current room is remembered by name and resolved
/// against the active list on read, so a name that no longer appears in the
/// directory simply reads as no current room until the next snapshot.
#[derive(Debug, Clone, Default)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
    current: Option<String>,
}

impl RoomRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole directory with a fresh snapshot.
    pub fn replace_all(&mut self, current: Room, active: Vec<Room>) {
        self.rooms = active;
        self.current = Some(current.name);
    }

    /// The room this session currently sits in, resolved against the active
    /// list.
    pub fn current_room(&self) -> Option<&Room> {
        let name = self.current.as_deref()?;
        self.rooms.iter().find(|room| room.name == name)
    }

    /// All advertised rooms in the order the server listed them.
    pub fn all_rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of advertised rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the registry holds no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Drop the directory and the current-room reference.
    pub fn clear(&mut self) {
        self.rooms.clear();
        self.current = None;
    }
}
