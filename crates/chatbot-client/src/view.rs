//! Read-only projection of messages for display.

use std::fmt;

use chatbot_core::{Message, MessageContent, MessageKind};

/// What a single transcript entry looks like on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageView<'a> {
    /// Plain text, with the attached file name when there is one.
    Text {
        author: MessageKind,
        body: &'a str,
        attachment: Option<&'a str>,
    },
    /// Card with a title, a description and its items in order.
    Card {
        author: MessageKind,
        title: &'a str,
        description: &'a str,
        items: &'a [String],
    },
}

/// Project a message into its view.
pub fn project(message: &Message) -> MessageView<'_> {
    match &message.content {
        MessageContent::Text(body) => MessageView::Text {
            author: message.kind,
            body,
            attachment: message.file.as_ref().map(|f| f.name.as_str()),
        },
        MessageContent::Card(card) => MessageView::Card {
            author: message.kind,
            title: &card.title,
            description: &card.description,
            items: &card.items,
        },
    }
}

impl MessageView<'_> {
    pub fn author(&self) -> MessageKind {
        match self {
            Self::Text { author, .. } | Self::Card { author, .. } => *author,
        }
    }
}

impl fmt::Display for MessageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text {
                author,
                body,
                attachment,
            } => {
                write!(f, "{}: {}", author.as_str(), body)?;
                if let Some(name) = attachment {
                    write!(f, "\n  Uploaded: {}", name)?;
                }
                Ok(())
            }
            Self::Card {
                author,
                title,
                description,
                items,
            } => {
                write!(f, "{}: [{}]\n  {}", author.as_str(), title, description)?;
                for item in items.iter() {
                    write!(f, "\n  - {}", item)?;
                }
                Ok(())
            }
        }
    }
}
