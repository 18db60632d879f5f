//! Error types for the chat client.

use thiserror::Error;

/// Errors that can occur when using the chat client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure or undecodable response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status.
    #[error("HTTP error! status: {status} - {body}")]
    Status { status: u16, body: String },

    /// Attachment could not be picked up.
    #[error(transparent)]
    Attachment(#[from] chatbot_core::CoreError),
}
