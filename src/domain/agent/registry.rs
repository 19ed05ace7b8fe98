use super::agent::{seed_roster, Agent};

/// Registry of collaborator identities and their active flags
///
/// Membership is fixed at construction from the seed roster; agents are
/// never added or removed afterwards. The only supported mutation is the
/// active toggle.
///
/// # Invariants
/// - Registry order is seed order and never changes
/// - Unknown-id toggles are silent no-ops, not errors
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    agents: Vec<Agent>,
}

impl AgentRegistry {
    /// Creates a registry seeded with the fixed five-agent roster
    pub fn new() -> Self {
        Self {
            agents: seed_roster(),
        }
    }

    /// Returns every agent in registry order
    pub fn list_all(&self) -> &[Agent] {
        &self.agents
    }

    /// Returns the active subset, registry order preserved
    pub fn list_active(&self) -> Vec<&Agent> {
        self.agents.iter().filter(|a| a.active).collect()
    }

    /// Looks up an agent by id
    pub fn get(&self, agent_id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == agent_id)
    }

    /// Returns whether the named agent exists and is active
    pub fn is_active(&self, agent_id: &str) -> bool {
        self.get(agent_id).map(|a| a.active).unwrap_or(false)
    }

    /// Flips the active flag of the named agent
    ///
    /// Returns the new flag value, or `None` when the id is unknown
    /// (a deliberate no-op; UI resilience over strictness).
    pub fn toggle_active(&mut self, agent_id: &str) -> Option<bool> {
        let agent = self.agents.iter_mut().find(|a| a.id == agent_id)?;
        agent.active = !agent.active;
        tracing::info!(agent_id, active = agent.active, "agent toggled");
        Some(agent.active)
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
