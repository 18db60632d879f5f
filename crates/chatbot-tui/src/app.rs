//! Application state and main event loop.

use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use chatbot_client::{ChatAction, ChatState};
use chatbot_core::Attachment;

use crate::event::{BackendCommand, UiEvent};
use crate::ui;

/// Lines moved per PageUp/PageDown.
const SCROLL_STEP: usize = 5;

/// What keystrokes currently edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a chat message.
    Compose,
    /// Typing the path of a file to attach.
    AttachPath(String),
}

/// Main application with UI state and channel handles.
pub struct App {
    /// Chat state, only touched on the UI thread.
    pub(crate) state: ChatState,

    /// Current input mode.
    pub(crate) mode: InputMode,

    /// Local notice (e.g. a bad attachment path), separate from send errors.
    pub(crate) notice: Option<String>,

    /// Lines scrolled back from the bottom of the transcript.
    pub(crate) scroll_back: usize,

    /// Service base URL, shown in the header.
    pub(crate) api_url: String,

    /// Receiver for events from the backend.
    ui_rx: mpsc::Receiver<UiEvent>,

    /// Sender for commands to the backend.
    cmd_tx: mpsc::Sender<BackendCommand>,
}

impl App {
    /// Create a new application instance with channel handles.
    pub fn new(
        api_url: impl Into<String>,
        ui_rx: mpsc::Receiver<UiEvent>,
        cmd_tx: mpsc::Sender<BackendCommand>,
    ) -> Self {
        Self {
            state: ChatState::new(),
            mode: InputMode::Compose,
            notice: None,
            scroll_back: 0,
            api_url: api_url.into(),
            ui_rx,
            cmd_tx,
        }
    }

    /// Run the main event loop.
    ///
    /// This runs on the main thread and handles:
    /// - Drawing the UI
    /// - Processing keyboard input
    /// - Receiving send results from the backend
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> std::io::Result<()> {
        loop {
            // Draw the UI
            terminal.draw(|frame| ui::render(frame, self))?;

            // Poll terminal events (non-blocking with short timeout)
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key) {
                        break; // quit requested
                    }
                }
            }

            // Process backend events (non-blocking)
            while let Ok(event) = self.ui_rx.try_recv() {
                self.apply_event(event);
            }
        }

        // Send quit command to backend
        let _ = self.cmd_tx.blocking_send(BackendCommand::Quit);

        Ok(())
    }

    /// Apply an event from the backend to the chat state.
    fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Delivered(action) => {
                self.state.apply(action);
            }
        }
    }

    /// Handle a key press.
    ///
    /// Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            return true;
        }

        if let InputMode::AttachPath(mut path) =
            std::mem::replace(&mut self.mode, InputMode::Compose)
        {
            match key.code {
                KeyCode::Esc => {}
                KeyCode::Enter => self.attach(path.trim()),
                KeyCode::Backspace => {
                    path.pop();
                    self.mode = InputMode::AttachPath(path);
                }
                KeyCode::Char(c) if !ctrl => {
                    path.push(c);
                    self.mode = InputMode::AttachPath(path);
                }
                _ => self.mode = InputMode::AttachPath(path),
            }
            return false;
        }

        match key.code {
            KeyCode::Esc => {
                return true;
            }
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Char('o') if ctrl => {
                self.notice = None;
                self.mode = InputMode::AttachPath(String::new());
            }
            KeyCode::Char('x') if ctrl => {
                self.state.apply(ChatAction::RemoveFile);
            }
            KeyCode::Backspace => {
                let mut input = self.state.input().to_string();
                input.pop();
                self.state.apply(ChatAction::InputChanged(input));
            }
            KeyCode::Char(c) if !ctrl => {
                let mut input = self.state.input().to_string();
                input.push(c);
                self.state.apply(ChatAction::InputChanged(input));
            }
            KeyCode::PageUp => {
                self.scroll_back = self.scroll_back.saturating_add(SCROLL_STEP);
            }
            KeyCode::PageDown => {
                self.scroll_back = self.scroll_back.saturating_sub(SCROLL_STEP);
            }
            KeyCode::End => {
                self.scroll_back = 0;
            }
            _ => {}
        }
        false
    }

    /// Submit the pending message and hand it to the backend.
    fn submit(&mut self) {
        let Some(message) = self.state.apply(ChatAction::Submit) else {
            return;
        };

        self.notice = None;
        self.scroll_back = 0;
        debug!(id = message.id, "Queueing message for delivery");

        if let Err(e) = self.cmd_tx.blocking_send(BackendCommand::Send(message)) {
            warn!(error = %e, "Backend is gone");
            self.state
                .apply(ChatAction::SendFailed("backend is not running".to_string()));
        }
    }

    /// Attach the file at `path`, or report why it cannot be attached.
    fn attach(&mut self, path: &str) {
        if path.is_empty() {
            return;
        }
        match Attachment::from_path(path) {
            Ok(file) => {
                self.notice = None;
                self.state.apply(ChatAction::AttachFile(file));
            }
            Err(e) => {
                self.notice = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatbot_core::{Message, MessageKind};

    fn app() -> (App, mpsc::Sender<UiEvent>, mpsc::Receiver<BackendCommand>) {
        let (ui_tx, ui_rx) = mpsc::channel(8);
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        (App::new("http://127.0.0.1:3000", ui_rx, cmd_tx), ui_tx, cmd_rx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_and_enter_queues_message() {
        let (mut app, _ui_tx, mut cmd_rx) = app();
        type_text(&mut app, "hix");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.state.input(), "hi");

        assert!(!app.handle_key(key(KeyCode::Enter)));
        assert_eq!(app.state.transcript().len(), 2);
        assert_eq!(app.state.input(), "");

        match cmd_rx.try_recv() {
            Ok(BackendCommand::Send(msg)) => assert_eq!(msg, Message::user(1, "hi")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_enter_on_blank_input_sends_nothing() {
        let (mut app, _ui_tx, mut cmd_rx) = app();
        type_text(&mut app, "  ");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.state.transcript().len(), 1);
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn test_delivered_reply_is_appended() {
        let (mut app, _ui_tx, _cmd_rx) = app();
        type_text(&mut app, "hi");
        app.handle_key(key(KeyCode::Enter));

        app.apply_event(UiEvent::Delivered(ChatAction::ReplyReceived(Message::bot(
            5, "reply",
        ))));

        assert_eq!(app.state.transcript().len(), 3);
        assert_eq!(app.state.transcript()[2].kind, MessageKind::Bot);
        assert_eq!(app.state.in_flight(), 0);
    }

    #[test]
    fn test_backend_gone_records_error() {
        let (mut app, _ui_tx, cmd_rx) = app();
        drop(cmd_rx);
        type_text(&mut app, "hello");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.state.transcript().len(), 2);
        assert_eq!(app.state.last_error(), Some("backend is not running"));
    }

    #[test]
    fn test_attach_dialog_flow() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("chatbot-tui-attach-{}.txt", std::process::id()));
        std::fs::write(&path, "data").unwrap();

        let (mut app, _ui_tx, _cmd_rx) = app();
        app.handle_key(ctrl('o'));
        assert_eq!(app.mode, InputMode::AttachPath(String::new()));

        type_text(&mut app, path.to_str().unwrap());
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.mode, InputMode::Compose);
        assert!(app.notice.is_none());
        assert!(app.state.attachment().is_some());

        app.handle_key(ctrl('x'));
        assert!(app.state.attachment().is_none());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_attach_bad_path_sets_notice() {
        let (mut app, _ui_tx, _cmd_rx) = app();
        app.handle_key(ctrl('o'));
        type_text(&mut app, "/no/such/file");
        app.handle_key(key(KeyCode::Enter));

        assert!(app.notice.is_some());
        assert!(app.state.attachment().is_none());
    }

    #[test]
    fn test_escape_cancels_dialog_then_quits() {
        let (mut app, _ui_tx, _cmd_rx) = app();
        app.handle_key(ctrl('o'));
        assert!(!app.handle_key(key(KeyCode::Esc)));
        assert_eq!(app.mode, InputMode::Compose);
        assert!(app.handle_key(key(KeyCode::Esc)));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let (mut app, _ui_tx, _cmd_rx) = app();
        assert!(app.handle_key(ctrl('c')));
    }
}
