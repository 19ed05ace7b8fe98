// Agent roster domain module
// Contains the agent entity, the fixed seed roster, and the registry

pub mod agent;
pub mod registry;

pub use agent::Agent;
pub use registry::AgentRegistry;
