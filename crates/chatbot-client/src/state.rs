//! Chat state container and its transitions.

use tracing::debug;

use chatbot_core::{Attachment, Message, Transcript, UPLOAD_PLACEHOLDER};

/// Transitions applied to [`ChatState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    /// Pending input text changed.
    InputChanged(String),

    /// Replace the pending attachment.
    AttachFile(Attachment),

    /// Drop the pending attachment.
    RemoveFile,

    /// Build the user message and append it optimistically.
    Submit,

    /// Service replied; append the reply.
    ReplyReceived(Message),

    /// Delivery failed; record the error and keep the user message.
    SendFailed(String),
}

/// Everything the chat view needs, owned by the UI.
#[derive(Debug, Clone)]
pub struct ChatState {
    transcript: Transcript,
    input: String,
    attachment: Option<Attachment>,
    last_error: Option<String>,
    in_flight: usize,
}

impl ChatState {
    /// Fresh session with the bot greeting.
    pub fn new() -> Self {
        Self {
            transcript: Transcript::with_greeting(),
            input: String::new(),
            attachment: None,
            last_error: None,
            in_flight: 0,
        }
    }

    /// Apply a transition.
    ///
    /// Returns the message to deliver when `Submit` produced one.
    pub fn apply(&mut self, action: ChatAction) -> Option<Message> {
        match action {
            ChatAction::InputChanged(text) => {
                self.input = text;
                None
            }
            ChatAction::AttachFile(file) => {
                debug!(name = %file.name, "Attachment set");
                self.attachment = Some(file);
                None
            }
            ChatAction::RemoveFile => {
                self.attachment = None;
                None
            }
            ChatAction::Submit => self.submit(),
            ChatAction::ReplyReceived(reply) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.transcript.push(reply);
                self.last_error = None;
                None
            }
            ChatAction::SendFailed(error) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.last_error = Some(error);
                None
            }
        }
    }

    fn submit(&mut self) -> Option<Message> {
        let text = self.input.trim();
        if text.is_empty() && self.attachment.is_none() {
            return None;
        }

        let content = if text.is_empty() {
            UPLOAD_PLACEHOLDER.to_string()
        } else {
            text.to_string()
        };

        let message = Message::user(self.transcript.len() as u64, content)
            .with_file(self.attachment.take());

        self.transcript.push(message.clone());
        self.input.clear();
        self.in_flight += 1;

        debug!(id = message.id, "User message appended");
        Some(message)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Number of sends still waiting for an answer.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatbot_core::{MessageContent, MessageKind, GREETING};
    use std::path::PathBuf;

    fn attachment(name: &str) -> Attachment {
        Attachment::new(name, PathBuf::from(format!("/tmp/{name}")), 10)
    }

    #[test]
    fn test_new_state_has_greeting() {
        let state = ChatState::new();
        assert_eq!(state.transcript().len(), 1);
        assert_eq!(state.transcript()[0], Message::bot(0, GREETING));
        assert!(state.last_error().is_none());
        assert_eq!(state.in_flight(), 0);
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut state = ChatState::new();
        state.apply(ChatAction::InputChanged("   \t ".into()));

        assert!(state.apply(ChatAction::Submit).is_none());
        assert_eq!(state.transcript().len(), 1);
        assert_eq!(state.input(), "   \t ");
        assert_eq!(state.in_flight(), 0);
    }

    #[test]
    fn test_submit_appends_optimistically() {
        let mut state = ChatState::new();
        state.apply(ChatAction::InputChanged("  hi  ".into()));

        let outgoing = state.apply(ChatAction::Submit).unwrap();
        assert_eq!(outgoing, Message::user(1, "hi"));
        assert_eq!(state.transcript().len(), 2);
        assert_eq!(state.transcript().last(), Some(&outgoing));
        assert_eq!(state.input(), "");
        assert_eq!(state.in_flight(), 1);
    }

    #[test]
    fn test_attachment_only_uses_placeholder() {
        let mut state = ChatState::new();
        state.apply(ChatAction::AttachFile(attachment("a.png")));

        let outgoing = state.apply(ChatAction::Submit).unwrap();
        assert_eq!(
            outgoing.content,
            MessageContent::Text(UPLOAD_PLACEHOLDER.into())
        );
        assert_eq!(outgoing.file.as_ref().map(|f| f.name.as_str()), Some("a.png"));
        assert!(state.attachment().is_none());
    }

    #[test]
    fn test_attach_replaces_and_remove_clears() {
        let mut state = ChatState::new();
        state.apply(ChatAction::AttachFile(attachment("first.txt")));
        state.apply(ChatAction::AttachFile(attachment("second.txt")));
        assert_eq!(state.attachment().map(|f| f.name.as_str()), Some("second.txt"));

        state.apply(ChatAction::RemoveFile);
        assert!(state.attachment().is_none());
        assert!(state.apply(ChatAction::Submit).is_none());
    }

    #[test]
    fn test_reply_appends_and_clears_error() {
        let mut state = ChatState::new();
        state.apply(ChatAction::InputChanged("one".into()));
        state.apply(ChatAction::Submit);
        state.apply(ChatAction::SendFailed("HTTP error! status: 500 - boom".into()));
        assert_eq!(state.last_error(), Some("HTTP error! status: 500 - boom"));

        state.apply(ChatAction::InputChanged("two".into()));
        state.apply(ChatAction::Submit);
        state.apply(ChatAction::ReplyReceived(Message::bot(77, "ok")));

        assert!(state.last_error().is_none());
        assert_eq!(state.transcript().len(), 4);
        assert_eq!(state.transcript()[3].kind, MessageKind::Bot);
        assert_eq!(state.in_flight(), 0);
    }

    #[test]
    fn test_failure_keeps_user_message() {
        let mut state = ChatState::new();
        state.apply(ChatAction::InputChanged("hello".into()));
        state.apply(ChatAction::Submit);
        state.apply(ChatAction::SendFailed("connection refused".into()));

        assert_eq!(state.transcript().len(), 2);
        assert_eq!(state.transcript()[1].content.as_text(), Some("hello"));
        assert_eq!(state.last_error(), Some("connection refused"));
    }

    #[test]
    fn test_interleaved_sends_resolve_by_arrival() {
        let mut state = ChatState::new();
        state.apply(ChatAction::InputChanged("a".into()));
        let first = state.apply(ChatAction::Submit).unwrap();
        state.apply(ChatAction::InputChanged("b".into()));
        let second = state.apply(ChatAction::Submit).unwrap();
        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(state.in_flight(), 2);

        // Second reply arrives first.
        state.apply(ChatAction::ReplyReceived(Message::bot(900, "re: b")));
        state.apply(ChatAction::ReplyReceived(Message::bot(901, "re: a")));

        let ids: Vec<u64> = state.transcript().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 900, 901]);
        assert_eq!(state.in_flight(), 0);
    }
}
