//! Message service configuration.

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default route prefix in front of `/messages`.
pub const DEFAULT_PATH_PREFIX: &str = "/api";

/// Message service configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP server bind address.
    pub bind_addr: String,

    /// Prefix the message routes are mounted under (e.g. `/api`).
    pub path_prefix: String,
}

impl ServerConfig {
    /// Prefix normalized to `/segment` form, or empty for the root.
    pub fn normalized_prefix(&self) -> String {
        let trimmed = self.path_prefix.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
        }
    }
}
