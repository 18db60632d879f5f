//! Append-only conversation transcript.

use std::ops::Index;

use crate::message::Message;
use crate::reply::GREETING;

/// Ordered sequence of messages shown to the user.
///
/// Messages can only be appended; nothing is edited or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript seeded with the bot greeting (id 0).
    pub fn with_greeting() -> Self {
        Self {
            messages: vec![Message::bot(0, GREETING)],
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }
}

impl Index<usize> for Transcript {
    type Output = Message;

    fn index(&self, index: usize) -> &Self::Output {
        &self.messages[index]
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageKind;

    #[test]
    fn test_with_greeting() {
        let transcript = Transcript::with_greeting();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].id, 0);
        assert_eq!(transcript[0].kind, MessageKind::Bot);
        assert_eq!(transcript[0].content.as_text(), Some(GREETING));
    }

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user(0, "a"));
        transcript.push(Message::bot(500, "b"));
        let ids: Vec<u64> = transcript.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![0, 500]);
    }
}
