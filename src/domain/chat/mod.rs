// Chat domain module
// Contains the message entity and the append-only conversation log

pub mod conversation;
pub mod message;

pub use conversation::ConversationLog;
pub use message::{AgentReply, ChatMessage, MessageKind};
