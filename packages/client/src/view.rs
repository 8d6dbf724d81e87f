//! Terminal rendering for session state.

use kaiwa_core::domain::{Message, MessageKind, RoomRegistry};
use kaiwa_core::protocol::ProtocolError;
use kaiwa_shared::time::clock_label;

/// Print one timeline message.
pub fn print_message(message: &Message) {
    match message.kind {
        MessageKind::Chat => println!(
            "[{}] {}: {}",
            clock_label(&message.sent_at),
            message.sender,
            message.body
        ),
        MessageKind::System => println!("[{}] * {}", clock_label(&message.sent_at), message.body),
    }
}

/// Print the room directory, marking the current room with an asterisk.
pub fn print_rooms(rooms: &RoomRegistry) {
    if rooms.is_empty() {
        println!("no rooms advertised yet");
        return;
    }
    let current = rooms.current_room().map(|room| room.name.as_str());
    for room in rooms.all_rooms() {
        let marker = if Some(room.name.as_str()) == current {
            "*"
        } else {
            " "
        };
        let suffix = if room.member_count == 1 { "" } else { "s" };
        let protected = if room.is_protected { " [protected]" } else { "" };
        println!(
            "{} {} ({} member{}){}",
            marker, room.name, room.member_count, suffix, protected
        );
    }
}

/// Print a warning about a rejected frame.
pub fn print_warning(warning: &ProtocolError) {
    println!("warning: {}", warning);
}

/// Print the command reference.
pub fn print_help() {
    println!("commands:");
    println!("  /rooms           list rooms (current room marked with *)");
    println!("  /create <name>   create a room and move into it");
    println!("  /join <name>     join a room");
    println!("  /help            this text");
    println!("  /quit            leave");
    println!("anything else is sent to your current room.");
}
