//! Transport seam between the chat state and the message service.

use async_trait::async_trait;

use chatbot_core::Message;

use crate::error::ClientError;

/// Delivers a user message and returns the service reply.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_message(&self, message: &Message) -> Result<Message, ClientError>;
}
