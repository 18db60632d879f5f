//! Reply generation.

use std::sync::Arc;

use chatbot_core::{bot_reply, Message, REPLY_ID_RANGE};
use rand::Rng;

/// Source of bot reply ids.
pub trait ReplyIdSource: Send + Sync {
    /// Next id, expected in `0..1000`.
    fn next_id(&self) -> u64;
}

/// Uniform draw from the reply id range. Not unique, not cryptographic.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl ReplyIdSource for RandomIds {
    fn next_id(&self) -> u64 {
        rand::thread_rng().gen_range(REPLY_ID_RANGE)
    }
}

/// Builds bot replies for incoming messages.
#[derive(Clone)]
pub struct MessageService {
    ids: Arc<dyn ReplyIdSource>,
}

impl MessageService {
    /// Service drawing random reply ids.
    pub fn new() -> Self {
        Self::with_ids(Arc::new(RandomIds))
    }

    /// Service with a custom id source.
    pub fn with_ids(ids: Arc<dyn ReplyIdSource>) -> Self {
        Self { ids }
    }

    /// Reply to the content of an incoming message.
    pub fn reply(&self, content: &str) -> Message {
        bot_reply(self.ids.next_id(), content)
    }
}

impl Default for MessageService {
    fn default() -> Self {
        Self::new()
    }
}
