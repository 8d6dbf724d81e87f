//! Interactive line input on a dedicated thread.
//!
//! rustyline blocks, so one thread owns the editor and serves prompt
//! requests over channels. The async side asks for a line with a prompt
//! string and awaits the answer, which lets the chat loop keep handling
//! transport events while a prompt is outstanding.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;

/// One answer from the input thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The user entered a line
    Line(String),
    /// Input ended (Ctrl-C, Ctrl-D, or the terminal went away)
    Closed,
}

/// Async-side handle to the input thread.
///
/// Requests and answers pair one-to-one. A request left unanswered when a
/// chat phase ends is discarded by the next [`InputHandle::prompt`] call,
/// so the pairing survives phase changes.
pub struct InputHandle {
    prompts: std::sync::mpsc::Sender<String>,
    lines: mpsc::UnboundedReceiver<InputEvent>,
    pending: bool,
}

impl InputHandle {
    /// Spawn the input thread and return its handle.
    pub fn spawn() -> Self {
        let (prompt_tx, prompt_rx) = std::sync::mpsc::channel::<String>();
        let (line_tx, line_rx) = mpsc::unbounded_channel();
        std::thread::spawn(move || input_thread(prompt_rx, line_tx));
        Self::from_channels(prompt_tx, line_rx)
    }

    /// Build a handle around existing channels.
    pub(crate) fn from_channels(
        prompts: std::sync::mpsc::Sender<String>,
        lines: mpsc::UnboundedReceiver<InputEvent>,
    ) -> Self {
        Self {
            prompts,
            lines,
            pending: false,
        }
    }

    /// Ask for the next line without waiting for it.
    pub fn request(&mut self, prompt: &str) {
        if self.prompts.send(prompt.to_string()).is_ok() {
            self.pending = true;
        }
    }

    /// The answer to an earlier [`InputHandle::request`].
    pub async fn next(&mut self) -> InputEvent {
        let event = self.lines.recv().await.unwrap_or(InputEvent::Closed);
        self.pending = false;
        event
    }

    /// Request a line and wait for the answer.
    ///
    /// A stale answer left over from an interrupted prompt is consumed and
    /// discarded first.
    pub async fn prompt(&mut self, prompt: &str) -> InputEvent {
        if self.pending {
            if let InputEvent::Closed = self.next().await {
                return InputEvent::Closed;
            }
        }
        self.request(prompt);
        self.next().await
    }
}

fn input_thread(
    prompts: std::sync::mpsc::Receiver<String>,
    lines: mpsc::UnboundedSender<InputEvent>,
) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            tracing::error!("readline init failed: {}", e);
            let _ = lines.send(InputEvent::Closed);
            return;
        }
    };
    while let Ok(prompt) = prompts.recv() {
        match editor.readline(&prompt) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                if lines.send(InputEvent::Line(line)).is_err() {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                let _ = lines.send(InputEvent::Closed);
                break;
            }
            Err(e) => {
                tracing::error!("readline error: {}", e);
                let _ = lines.send(InputEvent::Closed);
                break;
            }
        }
    }
}
