//! Chatbot Message Service Library
//!
//! Stateless HTTP service that answers every incoming chat message with a
//! canned bot reply.

pub mod config;
pub mod http;
pub mod service;
pub mod state;

pub use config::ServerConfig;
pub use http::create_router;
pub use service::{MessageService, RandomIds, ReplyIdSource};
pub use state::AppState;
