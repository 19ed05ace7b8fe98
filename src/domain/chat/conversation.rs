use super::message::{AgentReply, ChatMessage};
use crate::domain::errors::{ValidationError, ValidationResult};

/// The append-only ordered record of chat exchanges
///
/// # Invariants
/// - Messages are never edited or removed
/// - Ordering is insertion order; ids increase monotonically with it
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ConversationLog {
    /// Creates an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user-authored message
    ///
    /// Rejects empty or whitespace-only text; accepted text is stored
    /// untrimmed.
    pub fn append_user(&mut self, text: &str) -> ValidationResult<ChatMessage> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }

        let message = ChatMessage::user(self.allocate_id(), text.to_string());
        self.messages.push(message.clone());
        Ok(message)
    }

    /// Appends an already-constructed agent reply
    ///
    /// Used by both the response simulator and the transport adapter;
    /// replies are appended verbatim, no validation.
    pub fn append_agent(&mut self, reply: AgentReply) -> ChatMessage {
        let message = ChatMessage::agent(self.allocate_id(), reply);
        self.messages.push(message.clone());
        message
    }

    /// Returns the full ordered sequence
    pub fn list_all(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Returns the number of messages in the log
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns whether the log holds no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::message::MessageKind;
    use chrono::Utc;

    fn reply(sender: &str) -> AgentReply {
        AgentReply {
            content: "on it".to_string(),
            sender: sender.to_string(),
            avatar: "\u{1F4CA}".to_string(),
            agent_id: None,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn append_user_rejects_empty_text() {
        let mut log = ConversationLog::new();

        assert_eq!(log.append_user(""), Err(ValidationError::EmptyMessage));
        assert_eq!(log.append_user("   "), Err(ValidationError::EmptyMessage));
        assert!(log.is_empty());
    }

    #[test]
    fn append_user_grows_log_by_one() {
        let mut log = ConversationLog::new();

        let message = log.append_user("hello").unwrap();

        assert_eq!(log.len(), 1);
        assert_eq!(message.kind(), MessageKind::User);
        assert_eq!(message.content(), "hello");
    }

    #[test]
    fn ids_increase_with_insertion_order() {
        let mut log = ConversationLog::new();

        let first = log.append_user("one").unwrap();
        let second = log.append_agent(reply("Market Analyst"));
        let third = log.append_user("two").unwrap();

        assert!(first.id() < second.id());
        assert!(second.id() < third.id());
    }

    #[test]
    fn list_all_preserves_insertion_order() {
        let mut log = ConversationLog::new();
        log.append_user("one").unwrap();
        log.append_agent(reply("Tech Architect"));

        let ids: Vec<u64> = log.list_all().iter().map(|m| m.id()).collect();

        assert_eq!(ids, [1, 2]);
    }
}
