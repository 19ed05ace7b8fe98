use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use super::templates::library;
use crate::domain::agent::Agent;
use crate::domain::chat::AgentReply;
use crate::workspace::SharedState;

/// Default stagger between simulated replies
pub const DEFAULT_REPLY_INTERVAL: Duration = Duration::from_millis(1500);

/// Offline fallback that fabricates agent replies on a timer
///
/// Used only while the transport adapter is not connected. Each dispatch
/// schedules one reply per templated active agent, landing at
/// `(index + 1) * interval` so earlier agents always answer no later than
/// later ones.
///
/// Every scheduled reply is keyed to the generation current at dispatch
/// time; bumping the generation (a newer dispatch, [`cancel_pending`], or
/// workspace teardown) strands the older timers, which then exit without
/// appending.
///
/// [`cancel_pending`]: ResponseSimulator::cancel_pending
pub struct ResponseSimulator {
    state: SharedState,
    interval: Duration,
    generation: Arc<AtomicU64>,
}

impl ResponseSimulator {
    pub(crate) fn new(state: SharedState, interval: Duration) -> Self {
        Self {
            state,
            interval,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Schedules the simulated replies for one user submission
    ///
    /// Supersedes any replies still pending from an earlier submission.
    /// Returns the number of replies scheduled. Must be called within a
    /// Tokio runtime.
    pub fn dispatch(&self, message: &str, active_agents: &[Agent]) -> usize {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let templated: Vec<(Agent, String)> = active_agents
            .iter()
            .filter_map(|agent| {
                library::for_agent(&agent.id).map(|t| (agent.clone(), t.render(message)))
            })
            .collect();

        for (index, (agent, content)) in templated.iter().cloned().enumerate() {
            let delay = self.interval * (index as u32 + 1);
            let state = Arc::clone(&self.state);
            let current = Arc::clone(&self.generation);

            tokio::spawn(async move {
                tokio::time::sleep(delay).await;

                if current.load(Ordering::SeqCst) != generation {
                    tracing::debug!(agent_id = %agent.id, "simulated reply superseded");
                    return;
                }

                let reply = AgentReply {
                    content,
                    sender: agent.name,
                    avatar: agent.avatar,
                    agent_id: Some(agent.id),
                    timestamp: Utc::now(),
                };

                let mut state = state.lock().expect("workspace state lock poisoned");
                let message = state.conversation.append_agent(reply);
                tracing::debug!(id = message.id(), sender = message.sender(), "simulated reply appended");
            });
        }

        tracing::info!(scheduled = templated.len(), "simulated replies dispatched");
        templated.len()
    }

    /// Invalidates every reply still waiting on a timer
    ///
    /// The flush hook for component teardown; also called from the
    /// workspace's `Drop`.
    pub fn cancel_pending(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("pending simulated replies cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::MessageKind;
    use crate::workspace::new_shared_state;

    fn active_roster(state: &SharedState) -> Vec<Agent> {
        state
            .lock()
            .unwrap()
            .registry
            .list_active()
            .into_iter()
            .cloned()
            .collect()
    }

    #[tokio::test]
    async fn test_dispatch_schedules_one_reply_per_templated_agent() {
        let state = new_shared_state();
        let simulator = ResponseSimulator::new(Arc::clone(&state), Duration::from_millis(10));
        let roster = active_roster(&state);

        let scheduled = simulator.dispatch("build an AI tool", &roster);
        assert_eq!(scheduled, 3);

        tokio::time::sleep(Duration::from_millis(120)).await;

        let state = state.lock().unwrap();
        let senders: Vec<&str> = state
            .conversation
            .list_all()
            .iter()
            .map(|m| m.sender())
            .collect();
        assert_eq!(senders, ["Product Manager", "Tech Architect", "Market Analyst"]);
        assert!(state
            .conversation
            .list_all()
            .iter()
            .all(|m| m.kind() == MessageKind::Agent));
    }

    #[tokio::test]
    async fn test_dispatch_skips_inactive_and_untemplated_agents() {
        let state = new_shared_state();
        state.lock().unwrap().registry.toggle_active("tech");
        let simulator = ResponseSimulator::new(Arc::clone(&state), Duration::from_millis(10));
        let roster = active_roster(&state);

        let scheduled = simulator.dispatch("hello", &roster);

        // pitch and sprint have no template; tech is inactive.
        assert_eq!(scheduled, 2);
    }

    #[tokio::test]
    async fn test_cancel_pending_strands_scheduled_replies() {
        let state = new_shared_state();
        let simulator = ResponseSimulator::new(Arc::clone(&state), Duration::from_millis(20));
        let roster = active_roster(&state);

        simulator.dispatch("hello", &roster);
        simulator.cancel_pending();

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(state.lock().unwrap().conversation.is_empty());
    }

    #[tokio::test]
    async fn test_new_dispatch_supersedes_previous_generation() {
        let state = new_shared_state();
        let simulator = ResponseSimulator::new(Arc::clone(&state), Duration::from_millis(20));
        let roster = active_roster(&state);

        simulator.dispatch("first", &roster);
        simulator.dispatch("second", &roster);

        tokio::time::sleep(Duration::from_millis(200)).await;

        let state = state.lock().unwrap();
        assert_eq!(state.conversation.len(), 3);
        assert!(state
            .conversation
            .list_all()
            .iter()
            .filter(|m| m.agent_id() == Some("pm"))
            .all(|m| m.content().contains("\"second\"")));
    }
}
