use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::chat::AgentReply;

/// Frames sent to the backend
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundFrame {
    /// A user chat submission plus the currently active agent ids
    UserMessage {
        message: String,
        agents: Vec<String>,
    },
}

/// Frames received from the backend
///
/// Only `agent` frames carry meaning; every other `type` is ignored by
/// design, and malformed payloads fail to parse and are dropped by the
/// caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundFrame {
    Agent(AgentFrame),
    #[serde(other)]
    Ignored,
}

/// Payload of an inbound `agent` frame
#[derive(Debug, Clone, Deserialize)]
pub struct AgentFrame {
    pub content: String,
    pub sender: String,
    pub avatar: String,
    pub timestamp: String,
    #[serde(rename = "agentId", default)]
    pub agent_id: Option<String>,
}

impl AgentFrame {
    /// Converts the wire payload into a reply ready to append
    ///
    /// The wire timestamp is an RFC 3339 string; anything unparseable
    /// falls back to receive time rather than dropping the frame.
    pub fn into_reply(self) -> AgentReply {
        let timestamp = DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        AgentReply {
            content: self.content,
            sender: self.sender,
            avatar: self.avatar,
            agent_id: self.agent_id,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outbound_user_message_has_wire_shape() {
        let frame = OutboundFrame::UserMessage {
            message: "build an AI tool".to_string(),
            agents: vec!["pm".to_string(), "tech".to_string()],
        };

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&frame).unwrap()).unwrap();

        assert_eq!(value["type"], "user_message");
        assert_eq!(value["message"], "build an AI tool");
        assert_eq!(value["agents"], serde_json::json!(["pm", "tech"]));
    }

    #[test]
    fn inbound_agent_frame_parses() {
        let text = r#"{
            "type": "agent",
            "content": "on it",
            "sender": "Product Manager",
            "avatar": "x",
            "timestamp": "2024-01-15T10:30:00Z",
            "agentId": "pm"
        }"#;

        match serde_json::from_str::<InboundFrame>(text).unwrap() {
            InboundFrame::Agent(frame) => {
                assert_eq!(frame.sender, "Product Manager");
                assert_eq!(frame.agent_id.as_deref(), Some("pm"));
            }
            InboundFrame::Ignored => panic!("expected agent frame"),
        }
    }

    #[test]
    fn inbound_unknown_type_is_ignored() {
        let text = r#"{"type": "message_received", "message": "processing..."}"#;

        assert!(matches!(
            serde_json::from_str::<InboundFrame>(text).unwrap(),
            InboundFrame::Ignored
        ));
    }

    #[test]
    fn inbound_malformed_json_fails_to_parse() {
        assert!(serde_json::from_str::<InboundFrame>("not json").is_err());
        assert!(serde_json::from_str::<InboundFrame>(r#"{"type": "agent"}"#).is_err());
    }

    #[test]
    fn bad_wire_timestamp_falls_back_to_receive_time() {
        let frame = AgentFrame {
            content: "on it".to_string(),
            sender: "Product Manager".to_string(),
            avatar: "x".to_string(),
            timestamp: "yesterday-ish".to_string(),
            agent_id: None,
        };

        let before = Utc::now();
        let reply = frame.into_reply();

        assert!(reply.timestamp >= before);
    }

    #[test]
    fn good_wire_timestamp_is_preserved() {
        let frame = AgentFrame {
            content: "on it".to_string(),
            sender: "Product Manager".to_string(),
            avatar: "x".to_string(),
            timestamp: "2024-01-15T10:30:00Z".to_string(),
            agent_id: None,
        };

        let reply = frame.into_reply();

        assert_eq!(reply.timestamp.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }
}
