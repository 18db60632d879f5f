//! Shared application state.

use std::sync::Arc;

use crate::service::{MessageService, ReplyIdSource};

/// Shared application state.
///
/// Holds no per-request data; every request is independent.
pub struct AppState {
    /// Reply builder.
    pub service: MessageService,
}

impl AppState {
    /// Create a new AppState with random reply ids, wrapped in Arc.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Create a new AppState with a custom reply id source.
    pub fn with_ids(ids: Arc<dyn ReplyIdSource>) -> Arc<Self> {
        Arc::new(Self {
            service: MessageService::with_ids(ids),
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            service: MessageService::new(),
        }
    }
}
