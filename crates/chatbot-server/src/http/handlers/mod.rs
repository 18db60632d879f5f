//! HTTP request handlers.

mod health;
mod messages;

pub use health::health_check;
pub use messages::post_message;
