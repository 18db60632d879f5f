//! Message echo handler.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::{debug, info};

use chatbot_core::Message;

use crate::http::responses::RequestPayload;
use crate::state::AppState;

/// Reply to a chat message.
///
/// Malformed bodies never reach this handler; the `Json` extractor rejects them.
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RequestPayload>,
) -> Json<Message> {
    info!(payload = ?req.message, "Received message");

    let reply = state.service.reply(&req.message.content);
    debug!(reply_id = reply.id, "Reply built");

    Json(reply)
}
