//! Canned texts and the bot reply template.

use std::ops::Range;

use crate::message::Message;

/// First bot message of every session.
pub const GREETING: &str = "Hello! How can I assist you today?";

/// Fixed prefix of every bot reply.
pub const REPLY_PREFIX: &str = "Hello World, Human! This is a reply for your message: ";

/// Content used when the user sends only an attachment.
pub const UPLOAD_PLACEHOLDER: &str = "Uploaded a file";

/// Range bot reply ids are drawn from.
pub const REPLY_ID_RANGE: Range<u64> = 0..1000;

/// Build the bot reply for an incoming text.
pub fn bot_reply(id: u64, incoming: &str) -> Message {
    Message::bot(id, format!("{REPLY_PREFIX}{incoming}"))
}
