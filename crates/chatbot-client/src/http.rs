//! HTTP client for the message service.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use chatbot_core::Message;

use crate::error::ClientError;
use crate::transport::Transport;

/// Path of the message endpoint relative to the base URL.
pub const MESSAGES_PATH: &str = "/api/messages";

#[derive(Serialize)]
struct RequestPayload<'a> {
    message: &'a Message,
}

/// HTTP client for the message service.
#[derive(Debug, Clone)]
pub struct MessageClient {
    inner: reqwest::Client,
    base_url: String,
}

impl MessageClient {
    /// Create a new HTTP client.
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the message endpoint.
    pub fn messages_url(&self) -> String {
        format!("{}{}", self.base_url, MESSAGES_PATH)
    }

    /// Check if the message service is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let url = format!("{}/health", self.base_url);
        debug!(url = %url, "Checking health");

        let response = self.inner.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}

#[async_trait]
impl Transport for MessageClient {
    async fn send_message(&self, message: &Message) -> Result<Message, ClientError> {
        let url = self.messages_url();
        debug!(url = %url, id = message.id, "POST message");

        let response = self
            .inner
            .post(&url)
            .json(&RequestPayload { message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(status = status.as_u16(), error = %e, "Failed to read error body");
                    String::new()
                }
            };
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_url_trims_trailing_slash() {
        let client = MessageClient::new("http://localhost:3000/");
        assert_eq!(client.messages_url(), "http://localhost:3000/api/messages");
    }

    #[test]
    fn test_request_payload_shape() {
        let msg = Message::user(4, "hello");
        let json = serde_json::to_value(RequestPayload { message: &msg }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": { "id": 4, "type": "user", "content": "hello" } })
        );
    }
}
