use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use uuid::Uuid;

use crate::agents::simulator::{ResponseSimulator, DEFAULT_REPLY_INTERVAL};
use crate::domain::agent::{Agent, AgentRegistry};
use crate::domain::chat::{ChatMessage, ConversationLog};
use crate::domain::errors::ValidationResult;
use crate::domain::task::{NewTask, Task, TaskBoard, TaskEvent, TaskStatus};
use crate::transport::{ChatTransport, ConnectionState, OutboundFrame, TransportConfig};

/// The collections owned by the workspace controller
///
/// Shared only with the simulator's timer tasks and the transport's read
/// loop; every append takes the lock, so no two mutations race.
pub(crate) struct WorkspaceState {
    pub(crate) registry: AgentRegistry,
    pub(crate) board: TaskBoard,
    pub(crate) conversation: ConversationLog,
}

impl WorkspaceState {
    fn new(board: TaskBoard) -> Self {
        Self {
            registry: AgentRegistry::new(),
            board,
            conversation: ConversationLog::new(),
        }
    }
}

pub(crate) type SharedState = Arc<Mutex<WorkspaceState>>;

#[cfg(test)]
pub(crate) fn new_shared_state() -> SharedState {
    Arc::new(Mutex::new(WorkspaceState::new(TaskBoard::new())))
}

/// Top-level controller owning all workspace state
///
/// The only mutation surface in the crate: the presentation layer
/// receives cloned snapshots from the listing methods and calls the
/// operations below, never touching fields directly.
///
/// User submissions route to the transport adapter while it is
/// connected and to the response simulator otherwise. Dropping the
/// workspace cancels pending simulated replies and shuts the transport
/// down.
pub struct Workspace {
    state: SharedState,
    simulator: ResponseSimulator,
    transport: Option<ChatTransport>,
}

impl Workspace {
    /// Creates a workspace with an empty board
    pub fn new() -> Self {
        Self::build(TaskBoard::new(), DEFAULT_REPLY_INTERVAL)
    }

    /// Creates a workspace pre-seeded with the demo board
    pub fn with_demo_tasks() -> Self {
        Self::build(TaskBoard::with_demo_tasks(), DEFAULT_REPLY_INTERVAL)
    }

    /// Creates a workspace with a custom simulator stagger
    pub fn with_reply_interval(interval: Duration) -> Self {
        Self::build(TaskBoard::new(), interval)
    }

    fn build(board: TaskBoard, interval: Duration) -> Self {
        let state: SharedState = Arc::new(Mutex::new(WorkspaceState::new(board)));
        let simulator = ResponseSimulator::new(Arc::clone(&state), interval);
        Self {
            state,
            simulator,
            transport: None,
        }
    }

    // ===== Transport =====

    /// Attaches the real-time channel, replacing any previous one
    ///
    /// Must be called within a Tokio runtime; the adapter starts dialing
    /// immediately.
    pub fn attach_transport(&mut self, config: TransportConfig) {
        self.transport = Some(ChatTransport::spawn(config, Arc::clone(&self.state)));
    }

    /// Closes the real-time channel and waits for it to wind down
    pub async fn detach_transport(&mut self) {
        if let Some(transport) = self.transport.take() {
            transport.close().await;
        }
    }

    /// Returns the adapter's state, `Disconnected` when none is attached
    pub fn transport_state(&self) -> ConnectionState {
        self.transport
            .as_ref()
            .map(|t| t.connection_state())
            .unwrap_or(ConnectionState::Disconnected)
    }

    // ===== Agent roster =====

    /// Returns a snapshot of the full roster in registry order
    pub fn agents(&self) -> Vec<Agent> {
        self.lock().registry.list_all().to_vec()
    }

    /// Returns a snapshot of the active agents in registry order
    pub fn active_agents(&self) -> Vec<Agent> {
        self.lock()
            .registry
            .list_active()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Flips an agent's active flag; unknown ids are a no-op
    pub fn toggle_agent(&self, agent_id: &str) -> Option<bool> {
        self.lock().registry.toggle_active(agent_id)
    }

    // ===== Task board =====

    /// Returns a snapshot of every task in creation order
    pub fn tasks(&self) -> Vec<Task> {
        self.lock().board.list_all().to_vec()
    }

    /// Returns a snapshot of one board column in creation order
    pub fn tasks_by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.lock().board.list_by_status(status)
    }

    /// Creates a task from form input
    pub fn create_task(&self, input: NewTask) -> ValidationResult<Task> {
        let mut guard = self.lock();
        let WorkspaceState {
            registry, board, ..
        } = &mut *guard;

        let (task, event) = board.create(input, registry)?;
        tracing::info!(task_id = %event.task_id(), title = task.title(), "task created");
        Ok(task)
    }

    /// Moves a task to another column; unknown ids are a no-op
    pub fn move_task(&self, task_id: Uuid, to: TaskStatus) -> Option<TaskEvent> {
        let event = self.lock().board.move_task(task_id, to);
        match &event {
            Some(TaskEvent::Moved { task_id, from, to }) => {
                tracing::info!(%task_id, %from, %to, "task moved");
            }
            _ => tracing::debug!(%task_id, "move ignored for unknown task"),
        }
        event
    }

    // ===== Conversation =====

    /// Returns a snapshot of the full conversation in insertion order
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.lock().conversation.list_all().to_vec()
    }

    /// Appends a user message and routes it to the agents
    ///
    /// While the transport is connected the submission goes out as a
    /// `user_message` frame; otherwise (including when a send fails) the
    /// response simulator schedules the canned replies. Must be called
    /// within a Tokio runtime.
    pub fn submit_message(&self, text: &str) -> ValidationResult<ChatMessage> {
        let (message, active) = {
            let mut guard = self.lock();
            let message = guard.conversation.append_user(text)?;
            let active: Vec<Agent> = guard.registry.list_active().into_iter().cloned().collect();
            (message, active)
        };

        let sent = match &self.transport {
            Some(transport) if transport.is_connected() => {
                let frame = OutboundFrame::UserMessage {
                    message: text.to_string(),
                    agents: active.iter().map(|a| a.id.clone()).collect(),
                };
                match transport.send(frame) {
                    Ok(()) => true,
                    Err(err) => {
                        tracing::warn!(%err, "transport send failed, falling back to simulator");
                        false
                    }
                }
            }
            _ => false,
        };

        if !sent {
            self.simulator.dispatch(text, &active);
        }

        Ok(message)
    }

    fn lock(&self) -> MutexGuard<'_, WorkspaceState> {
        self.state.lock().expect("workspace state lock poisoned")
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        // Strand any replies still on a timer so they cannot append to a
        // torn-down log; the transport cancels its own driver on drop.
        self.simulator.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ValidationError;
    use crate::domain::task::TaskPriority;

    fn task_input(title: &str, assigned_to: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: String::new(),
            priority: TaskPriority::Medium,
            assigned_to: assigned_to.to_string(),
            due_date: None,
        }
    }

    #[test]
    fn snapshots_are_detached_from_state() {
        let workspace = Workspace::new();

        let mut snapshot = workspace.agents();
        snapshot.clear();

        assert_eq!(workspace.agents().len(), 5);
    }

    #[test]
    fn toggle_agent_round_trips() {
        let workspace = Workspace::new();

        assert_eq!(workspace.toggle_agent("market"), Some(false));
        assert_eq!(workspace.toggle_agent("market"), Some(true));
        assert_eq!(workspace.toggle_agent("nobody"), None);
    }

    #[test]
    fn create_task_requires_active_assignee() {
        let workspace = Workspace::new();
        workspace.toggle_agent("pitch");

        let err = workspace
            .create_task(task_input("Deck", "pitch"))
            .unwrap_err();

        assert_eq!(err, ValidationError::InactiveAssignee("pitch".to_string()));
    }

    #[test]
    fn move_task_reports_the_transition() {
        let workspace = Workspace::new();
        let task = workspace.create_task(task_input("First", "pm")).unwrap();

        let event = workspace.move_task(task.id(), TaskStatus::Review).unwrap();

        assert_eq!(
            event,
            TaskEvent::Moved {
                task_id: task.id(),
                from: TaskStatus::Todo,
                to: TaskStatus::Review,
            }
        );
    }

    #[test]
    fn submit_rejects_blank_text_without_scheduling() {
        // No runtime here on purpose: the rejection path must not reach
        // the simulator's spawn.
        let workspace = Workspace::new();

        assert_eq!(
            workspace.submit_message("   "),
            Err(ValidationError::EmptyMessage)
        );
        assert!(workspace.messages().is_empty());
    }

    #[tokio::test]
    async fn submit_appends_user_message_immediately() {
        let workspace = Workspace::with_reply_interval(Duration::from_millis(50));

        let message = workspace.submit_message("build an AI tool").unwrap();

        assert_eq!(message.sender(), "You");
        assert_eq!(workspace.messages().len(), 1);
    }

    #[test]
    fn transport_state_defaults_to_disconnected() {
        let workspace = Workspace::new();

        assert_eq!(workspace.transport_state(), ConnectionState::Disconnected);
    }
}
