// Transport adapter modules
//
// Optional real-time channel to the backend. While connected it replaces
// the response simulator as the source of agent messages and forwards
// user submissions outward.

pub mod client;
pub mod config;
pub mod errors;
pub mod frames;

// Re-export main types
pub use client::{ChatTransport, ConnectionState};
pub use config::{ReconnectConfig, TransportConfig};
pub use errors::{TransportError, TransportResult};
pub use frames::{AgentFrame, InboundFrame, OutboundFrame};
