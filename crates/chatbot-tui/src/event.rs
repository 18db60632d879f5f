//! Event types for communication between the backend and the UI.

use chatbot_client::ChatAction;
use chatbot_core::Message;

/// Events sent from the backend to the UI thread.
#[derive(Debug)]
pub enum UiEvent {
    /// A send finished; the action is either a reply or a failure.
    Delivered(ChatAction),
}

/// Commands sent from UI to the backend.
#[derive(Debug)]
pub enum BackendCommand {
    /// Deliver a user message to the service.
    Send(Message),

    /// Quit the backend.
    Quit,
}
