//! Chat client library for Chatbot.
//!
//! Holds the transcript state machine, the transport seam, and the HTTP
//! client that talks to the message service.

pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod state;
pub mod transport;
pub mod view;

pub use config::ClientConfig;
pub use error::ClientError;
pub use http::MessageClient;
pub use session::{deliver, ChatSession, SendOutcome};
pub use state::{ChatAction, ChatState};
pub use transport::Transport;
pub use view::{project, MessageView};
