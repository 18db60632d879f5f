//! HTTP request and response types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Message types
// ============================================================================

/// Request body for the messages endpoint.
#[derive(Debug, Deserialize)]
pub struct RequestPayload {
    pub message: IncomingMessage,
}

/// Message as received from a client.
///
/// Only `content` is read and it must be a JSON string. Every other field
/// (`id`, `type`, a file reference) is ignored whatever its shape.
#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    pub content: String,
}

// ============================================================================
// Health types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
