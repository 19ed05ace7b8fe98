//! Crewboard state engine
//!
//! In-memory core of an agent-team collaboration board: the agent
//! roster, the kanban task board, and the append-only conversation log,
//! plus the offline response simulator and the optional WebSocket
//! transport adapter that replaces it while connected. The presentation
//! layer consumes snapshots and calls the [`Workspace`] operations; all
//! state is volatile and process-lifetime only.

pub mod agents;
pub mod domain;
pub mod transport;
pub mod workspace;

pub use workspace::Workspace;
