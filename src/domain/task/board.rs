use chrono::NaiveDate;
use uuid::Uuid;

use super::events::TaskEvent;
use super::task::{NewTask, Task};
use super::value_objects::{TaskPriority, TaskStatus};
use crate::domain::agent::AgentRegistry;
use crate::domain::errors::{ValidationError, ValidationResult};

/// The kanban task store
///
/// Holds every task in creation order; that order is the stable sort key
/// for every listing and is never perturbed by status changes. Tasks are
/// never deleted.
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    /// Creates an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board pre-seeded with the demo tasks
    ///
    /// Used as the empty-board fallback the page renders before the user
    /// has created anything.
    pub fn with_demo_tasks() -> Self {
        Self {
            tasks: demo_tasks(),
        }
    }

    /// Creates a task from form input and appends it to the board
    ///
    /// # Business Rules Enforced
    /// - Title must not be empty (checked by the task constructor)
    /// - The assignee must name a known agent that is active right now;
    ///   the reference is not re-validated later
    ///
    /// Returns the created task and its `Created` event.
    pub fn create(
        &mut self,
        input: NewTask,
        registry: &AgentRegistry,
    ) -> ValidationResult<(Task, TaskEvent)> {
        match registry.get(&input.assigned_to) {
            None => {
                return Err(ValidationError::UnknownAssignee(input.assigned_to));
            }
            Some(agent) if !agent.active => {
                return Err(ValidationError::InactiveAssignee(input.assigned_to));
            }
            Some(_) => {}
        }

        let task = Task::new(input)?;
        let event = TaskEvent::Created {
            task_id: task.id(),
            title: task.title().to_string(),
            assigned_to: task.assigned_to().to_string(),
        };

        self.tasks.push(task.clone());
        Ok((task, event))
    }

    /// Moves the named task to a new board column
    ///
    /// Unknown ids are a no-op returning `None`; the rest of the board is
    /// untouched either way. Moving a task onto its current column still
    /// reports the (degenerate) move.
    pub fn move_task(&mut self, task_id: Uuid, to: TaskStatus) -> Option<TaskEvent> {
        let task = self.tasks.iter_mut().find(|t| t.id() == task_id)?;
        let from = task.status();
        task.set_status(to);
        Some(TaskEvent::Moved { task_id, from, to })
    }

    /// Returns the tasks in the given column, creation order preserved
    pub fn list_by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.status() == status)
            .cloned()
            .collect()
    }

    /// Returns every task in creation order
    pub fn list_all(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id
    pub fn get(&self, task_id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == task_id)
    }

    /// Returns the number of tasks on the board
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the board holds no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// The four sample tasks shown on a fresh board
fn demo_tasks() -> Vec<Task> {
    vec![
        Task::from_parts(
            "Market Research for AI Finance Tool",
            "Research competitors and market opportunities in AI finance space",
            TaskStatus::Todo,
            TaskPriority::High,
            "market",
            "PM Agent",
            NaiveDate::from_ymd_opt(2024, 1, 20),
            &["research", "finance", "ai"],
        ),
        Task::from_parts(
            "Technical Architecture Design",
            "Design system architecture and choose tech stack",
            TaskStatus::InProgress,
            TaskPriority::High,
            "tech",
            "PM Agent",
            NaiveDate::from_ymd_opt(2024, 1, 22),
            &["architecture", "backend"],
        ),
        Task::from_parts(
            "User Persona Development",
            "Create detailed user personas for target audience",
            TaskStatus::Review,
            TaskPriority::Medium,
            "pm",
            "Market Analyst",
            NaiveDate::from_ymd_opt(2024, 1, 18),
            &["ux", "personas"],
        ),
        Task::from_parts(
            "Pitch Deck Creation",
            "Create compelling pitch deck for stakeholders",
            TaskStatus::Done,
            TaskPriority::Medium,
            "pitch",
            "PM Agent",
            NaiveDate::from_ymd_opt(2024, 1, 15),
            &["presentation", "pitch"],
        ),
    ]
}
