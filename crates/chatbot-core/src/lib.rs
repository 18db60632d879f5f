//! Chatbot Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - Network/HTTP
//! - Terminal rendering
//! - Runtime specifics
//!
//! Both the message service and the chat client speak in these types.

pub mod attachment;
pub mod error;
pub mod message;
pub mod reply;
pub mod transcript;

// Re-export commonly used types
pub use attachment::Attachment;
pub use error::CoreError;
pub use message::{CardContent, Message, MessageContent, MessageKind};
pub use reply::{bot_reply, GREETING, REPLY_ID_RANGE, REPLY_PREFIX, UPLOAD_PLACEHOLDER};
pub use transcript::Transcript;
