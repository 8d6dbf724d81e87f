//! Interactive client runtime.
//!
//! Two phases alternate until the user leaves: a login phase that prompts
//! for credentials and exchanges them for a connection identity, and a chat
//! phase that drives one session over one WebSocket connection. A session
//! that the server closes falls back to the login phase; `/quit` ends the
//! program.

use std::sync::Arc;

use kaiwa_core::auth::Authenticator;
use kaiwa_core::domain::{RoomName, Username};
use kaiwa_core::protocol::ClientCommand;
use kaiwa_core::session::{Identity, Session, SessionUpdate};
use reqwest::Url;
use tokio::sync::mpsc;

use crate::auth::HttpAuthenticator;
use crate::command::{self, UserAction};
use crate::config::Config;
use crate::error::ClientError;
use crate::input::{InputEvent, InputHandle};
use crate::transport::{self, TransportHandle};
use crate::view;

/// Why a chat phase ended.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    /// The user asked to leave
    Quit,
    /// The connection closed and the session was invalidated
    LoggedOut,
}

/// Run the interactive client until the user quits.
pub async fn run(config: Config) -> Result<(), ClientError> {
    let ws_url = Url::parse(&config.ws_url).map_err(|e| ClientError::InvalidWsUrl {
        url: config.ws_url.clone(),
        reason: e.to_string(),
    })?;
    let authenticator: Arc<dyn Authenticator> =
        Arc::new(HttpAuthenticator::new(config.api_url.clone()));
    let mut input = InputHandle::spawn();
    let mut preset_username = config.username;

    println!("kaiwa client (type /help in chat for commands)");

    loop {
        let Some(identity) =
            login_phase(authenticator.as_ref(), &mut input, preset_username.take()).await
        else {
            return Ok(());
        };
        match chat_phase(&ws_url, identity, &mut input).await? {
            Outcome::Quit => return Ok(()),
            Outcome::LoggedOut => {
                println!("you have been logged out. log in again, or press Ctrl-D to leave.");
            }
        }
    }
}

/// Prompt for credentials until a login succeeds. `None` when input ends.
async fn login_phase(
    authenticator: &dyn Authenticator,
    input: &mut InputHandle,
    preset_username: Option<String>,
) -> Option<Identity> {
    let mut preset = preset_username;
    loop {
        let raw_username = match preset.take() {
            Some(name) => name,
            None => match input.prompt("username: ").await {
                InputEvent::Line(line) => line,
                InputEvent::Closed => return None,
            },
        };
        let trimmed = raw_username.trim();
        if trimmed.is_empty() {
            continue;
        }
        let username = match Username::new(trimmed.to_string()) {
            Ok(username) => username,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        let password = match input.prompt("password: ").await {
            InputEvent::Line(line) => line,
            InputEvent::Closed => return None,
        };
        match authenticator.authenticate(&username, &password).await {
            Ok(identity) => {
                println!("logged in as {}", username);
                return Some(identity);
            }
            Err(e) => println!("login failed: {}", e),
        }
    }
}

/// Drive one session over one connection until it ends.
async fn chat_phase(
    ws_url: &Url,
    identity: Identity,
    input: &mut InputHandle,
) -> Result<Outcome, ClientError> {
    let mut session = Session::new();
    session.connect(identity.clone())?;

    let (event_tx, mut events) = mpsc::unbounded_channel();
    let transport = transport::spawn(ws_url.clone(), &identity, event_tx);
    println!("connecting to {} as {} ...", ws_url, identity.username());

    input.request("> ");
    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    tracing::debug!("transport event channel closed");
                    return Ok(Outcome::LoggedOut);
                };
                for update in session.handle(event) {
                    match update {
                        SessionUpdate::Connected => println!("connected."),
                        SessionUpdate::MessageAppended => {
                            if let Some(message) = session.timeline().last() {
                                view::print_message(message);
                            }
                        }
                        SessionUpdate::RoomsRefreshed => {
                            tracing::debug!(
                                "room directory refreshed ({} rooms)",
                                session.rooms().len()
                            );
                        }
                        SessionUpdate::Warning(warning) => view::print_warning(&warning),
                        SessionUpdate::Invalidated => {
                            println!("connection closed; session ended.");
                            println!("press Enter to return to the login prompt.");
                            return Ok(Outcome::LoggedOut);
                        }
                    }
                }
            }
            line = input.next() => {
                match line {
                    InputEvent::Closed => return Ok(Outcome::Quit),
                    InputEvent::Line(text) => {
                        if let Some(outcome) =
                            handle_line(&text, &session, &transport, identity.username())
                        {
                            return Ok(outcome);
                        }
                        input.request("> ");
                    }
                }
            }
        }
    }
}

/// Apply one line of user input. `Some` ends the chat phase.
fn handle_line(
    text: &str,
    session: &Session,
    transport: &TransportHandle,
    username: &Username,
) -> Option<Outcome> {
    let action = command::parse_line(text)?;
    match action {
        UserAction::Say(message) => {
            deliver(session, transport, &ClientCommand::send_message(username, message));
        }
        UserAction::CreateRoom(name) => match RoomName::new(name) {
            Ok(name) => deliver(
                session,
                transport,
                &ClientCommand::create_room(&name, username),
            ),
            Err(e) => println!("{}", e),
        },
        UserAction::JoinRoom(name) => match RoomName::new(name) {
            Ok(name) => deliver(
                session,
                transport,
                &ClientCommand::join_room(&name, username),
            ),
            Err(e) => println!("{}", e),
        },
        UserAction::ListRooms => view::print_rooms(session.rooms()),
        UserAction::Help => view::print_help(),
        UserAction::Quit => return Some(Outcome::Quit),
        UserAction::Unknown(name) => println!("unknown command /{}; try /help", name),
    }
    None
}

/// Encode through the session and hand the wire text to the transport.
fn deliver(session: &Session, transport: &TransportHandle, command: &ClientCommand) {
    match session.send(command) {
        Some(wire) => transport.send(wire),
        None => println!("not connected; nothing sent"),
    }
}
