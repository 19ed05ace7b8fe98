use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Agent,
}

/// An already-constructed agent reply, ready to append
///
/// Produced by the response simulator and by the transport adapter when
/// an `agent` frame arrives; the conversation log assigns the id.
#[derive(Debug, Clone)]
pub struct AgentReply {
    pub content: String,
    pub sender: String,
    pub avatar: String,
    pub agent_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// One entry in the conversation log
///
/// Messages are immutable once appended; ids increase monotonically in
/// insertion order within a log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: u64,
    #[serde(rename = "type")]
    kind: MessageKind,
    content: String,
    timestamp: DateTime<Utc>,
    sender: String,
    avatar: Option<String>,
    agent_id: Option<String>,
}

impl ChatMessage {
    pub(crate) fn user(id: u64, content: String) -> Self {
        Self {
            id,
            kind: MessageKind::User,
            content,
            timestamp: Utc::now(),
            sender: "You".to_string(),
            avatar: None,
            agent_id: None,
        }
    }

    pub(crate) fn agent(id: u64, reply: AgentReply) -> Self {
        Self {
            id,
            kind: MessageKind::Agent,
            content: reply.content,
            timestamp: reply.timestamp,
            sender: reply.sender,
            avatar: Some(reply.avatar),
            agent_id: reply.agent_id,
        }
    }

    // ===== Getters =====

    /// Returns the message's id, monotonic within its log
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns whether a user or an agent authored the message
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Returns the message text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creation timestamp
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the sender's display label
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the sender's avatar (agent messages only)
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Returns the originating agent's id (agent messages only)
    pub fn agent_id(&self) -> Option<&str> {
        self.agent_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_carries_local_sender() {
        let message = ChatMessage::user(1, "hello".to_string());

        assert_eq!(message.kind(), MessageKind::User);
        assert_eq!(message.sender(), "You");
        assert_eq!(message.avatar(), None);
        assert_eq!(message.agent_id(), None);
    }

    #[test]
    fn agent_message_keeps_reply_fields() {
        let reply = AgentReply {
            content: "on it".to_string(),
            sender: "Product Manager".to_string(),
            avatar: "\u{1F468}\u{200D}\u{1F4BC}".to_string(),
            agent_id: Some("pm".to_string()),
            timestamp: Utc::now(),
        };

        let message = ChatMessage::agent(2, reply);

        assert_eq!(message.kind(), MessageKind::Agent);
        assert_eq!(message.sender(), "Product Manager");
        assert_eq!(message.agent_id(), Some("pm"));
        assert!(message.avatar().is_some());
    }
}
