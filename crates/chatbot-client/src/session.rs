//! Send orchestration over a [`Transport`].

use std::path::Path;

use tracing::{info, warn};

use chatbot_core::{Attachment, Message};

use crate::error::ClientError;
use crate::state::{ChatAction, ChatState};
use crate::transport::Transport;

/// Result of a single `send`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing to send (blank input, no attachment).
    Skipped,
    /// Reply received and appended.
    Resolved(Message),
    /// Delivery failed; the error was recorded.
    Failed(String),
}

/// Deliver a message and turn the result into the matching state transition.
pub async fn deliver<T: Transport + ?Sized>(transport: &T, message: &Message) -> ChatAction {
    match transport.send_message(message).await {
        Ok(reply) => {
            info!(id = message.id, reply_id = reply.id, "Reply received");
            ChatAction::ReplyReceived(reply)
        }
        Err(e) => {
            warn!(id = message.id, error = %e, "Send failed");
            ChatAction::SendFailed(e.to_string())
        }
    }
}

/// Chat state bound to a transport.
pub struct ChatSession<T> {
    state: ChatState,
    transport: T,
}

impl<T: Transport> ChatSession<T> {
    /// New session with the greeting transcript.
    pub fn new(transport: T) -> Self {
        Self {
            state: ChatState::new(),
            transport,
        }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    /// Replace the pending input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.apply(ChatAction::InputChanged(text.into()));
    }

    /// Attach a file from disk, replacing any pending one.
    pub fn attach_file(&mut self, path: impl AsRef<Path>) -> Result<(), ClientError> {
        let file = Attachment::from_path(path)?;
        self.state.apply(ChatAction::AttachFile(file));
        Ok(())
    }

    /// Drop the pending attachment.
    pub fn remove_file(&mut self) {
        self.state.apply(ChatAction::RemoveFile);
    }

    /// Send the pending input and/or attachment and wait for the reply.
    pub async fn send(&mut self) -> SendOutcome {
        let Some(outgoing) = self.state.apply(ChatAction::Submit) else {
            return SendOutcome::Skipped;
        };

        let action = deliver(&self.transport, &outgoing).await;
        let outcome = match &action {
            ChatAction::ReplyReceived(reply) => SendOutcome::Resolved(reply.clone()),
            ChatAction::SendFailed(error) => SendOutcome::Failed(error.clone()),
            _ => SendOutcome::Skipped,
        };
        self.state.apply(action);
        outcome
    }
}
