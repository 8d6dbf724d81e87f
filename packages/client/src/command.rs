//! Parsing of interactive chat input.
//!
//! Lines starting with `/` are commands; everything else is chat text for
//! the current room.

/// One parsed line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Plain chat text for the current room
    Say(String),
    /// `/create <name>`
    CreateRoom(String),
    /// `/join <name>`
    JoinRoom(String),
    /// `/rooms`
    ListRooms,
    /// `/help`
    Help,
    /// `/quit`
    Quit,
    /// A slash command this client does not know
    Unknown(String),
}

/// Parse one line of input. Blank lines parse to `None`.
pub fn parse_line(line: &str) -> Option<UserAction> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let Some(command) = trimmed.strip_prefix('/') else {
        return Some(UserAction::Say(trimmed.to_string()));
    };
    let (name, argument) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };
    let action = match name {
        "create" => UserAction::CreateRoom(argument.to_string()),
        "join" => UserAction::JoinRoom(argument.to_string()),
        "rooms" => UserAction::ListRooms,
        "help" => UserAction::Help,
        "quit" | "exit" => UserAction::Quit,
        other => UserAction::Unknown(other.to_string()),
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_chat() {
        // テスト項目: スラッシュで始まらない行はチャット本文になる
        // given (前提条件) / when (操作):
        let action = parse_line("  hello there  ");

        // then (期待する結果):
        assert_eq!(action, Some(UserAction::Say("hello there".to_string())));
    }

    #[test]
    fn test_blank_line_is_nothing() {
        // テスト項目: 空行は何にもならない
        // then (期待する結果):
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
    }

    #[test]
    fn test_create_command_takes_argument() {
        // テスト項目: /create が引数付きで解釈される
        // then (期待する結果):
        assert_eq!(
            parse_line("/create games"),
            Some(UserAction::CreateRoom("games".to_string()))
        );
        // 引数なしは空文字列として届き、後段のバリデーションで弾かれる
        assert_eq!(
            parse_line("/create"),
            Some(UserAction::CreateRoom("".to_string()))
        );
    }

    #[test]
    fn test_join_command_takes_argument() {
        // テスト項目: /join が引数付きで解釈される
        // then (期待する結果):
        assert_eq!(
            parse_line("/join general"),
            Some(UserAction::JoinRoom("general".to_string()))
        );
    }

    #[test]
    fn test_bare_commands() {
        // テスト項目: 引数なしコマンドが解釈される
        // then (期待する結果):
        assert_eq!(parse_line("/rooms"), Some(UserAction::ListRooms));
        assert_eq!(parse_line("/help"), Some(UserAction::Help));
        assert_eq!(parse_line("/quit"), Some(UserAction::Quit));
        assert_eq!(parse_line("/exit"), Some(UserAction::Quit));
    }

    #[test]
    fn test_unknown_command_is_reported() {
        // テスト項目: 未知のコマンドは Unknown になる
        // then (期待する結果):
        assert_eq!(
            parse_line("/frobnicate now"),
            Some(UserAction::Unknown("frobnicate".to_string()))
        );
    }
}
