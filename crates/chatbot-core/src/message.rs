//! Chat message types shared by the service and the client.

use serde::{Deserialize, Serialize};

use crate::attachment::Attachment;

/// Author of a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Message typed by the human.
    #[default]
    User,
    /// Message produced by the service.
    Bot,
}

impl MessageKind {
    /// Wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// Structured card payload.
///
/// Only ever produced locally; the service replies with plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardContent {
    pub title: String,
    pub description: String,
    pub items: Vec<String>,
}

/// Body of a message: plain text or a card.
///
/// Untagged on the wire, so text is a bare JSON string and a card is an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Card(CardContent),
}

impl MessageContent {
    /// Text body, if this is a text message.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Card(_) => None,
        }
    }
}

impl From<String> for MessageContent {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for MessageContent {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<CardContent> for MessageContent {
    fn from(card: CardContent) -> Self {
        Self::Card(card)
    }
}

/// One chat turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Client-assigned position for user messages, random draw for bot replies.
    pub id: u64,

    #[serde(rename = "type")]
    pub kind: MessageKind,

    pub content: MessageContent,

    /// Local attachment reference. Never sent over the wire.
    #[serde(skip)]
    pub file: Option<Attachment>,
}

impl Message {
    /// Create a new message without an attachment.
    pub fn new(id: u64, kind: MessageKind, content: impl Into<MessageContent>) -> Self {
        Self {
            id,
            kind,
            content: content.into(),
            file: None,
        }
    }

    /// Create a user message.
    pub fn user(id: u64, content: impl Into<MessageContent>) -> Self {
        Self::new(id, MessageKind::User, content)
    }

    /// Create a bot message.
    pub fn bot(id: u64, content: impl Into<MessageContent>) -> Self {
        Self::new(id, MessageKind::Bot, content)
    }

    /// Attach a local file reference.
    pub fn with_file(mut self, file: Option<Attachment>) -> Self {
        self.file = file;
        self
    }
}
