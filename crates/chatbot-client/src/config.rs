//! Client configuration.

/// Environment variable holding the message service base URL.
pub const API_URL_ENV: &str = "CHATBOT_API_URL";

/// Base URL used when the environment does not provide one.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the message service, without the `/api/messages` path.
    pub api_url: String,
}

impl ClientConfig {
    /// Reads `CHATBOT_API_URL`, falling back to the default.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_URL_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        let api_url = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { api_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
