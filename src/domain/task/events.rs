use super::value_objects::TaskStatus;
use uuid::Uuid;

/// Domain events that occur within the task board
///
/// Returned to the caller alongside the mutation result so the
/// presentation layer can react without polling the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent {
    /// Fired when a task is created on the board
    Created {
        /// ID of the newly created task
        task_id: Uuid,
        /// The task's title
        title: String,
        /// Agent id the task was assigned to
        assigned_to: String,
    },
    /// Fired when a task changes column
    Moved {
        /// ID of the moved task
        task_id: Uuid,
        /// Column the task left
        from: TaskStatus,
        /// Column the task entered
        to: TaskStatus,
    },
}

impl TaskEvent {
    /// Returns the task_id for this event
    pub fn task_id(&self) -> Uuid {
        match self {
            TaskEvent::Created { task_id, .. } => *task_id,
            TaskEvent::Moved { task_id, .. } => *task_id,
        }
    }
}
