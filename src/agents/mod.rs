// Agent reply simulation modules
//
// This module contains the offline fallback that stands in for real
// agent output: canned reply templates and the timer fan-out that
// schedules them.

pub mod simulator;
pub mod templates;

// Re-export main types
pub use simulator::{ResponseSimulator, DEFAULT_REPLY_INTERVAL};
pub use templates::ReplyTemplate;
