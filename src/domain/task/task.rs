use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{TaskPriority, TaskStatus};
use crate::domain::errors::{ValidationError, ValidationResult};

/// Input for creating a task via the board's creation form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub assigned_to: String,
    pub due_date: Option<NaiveDate>,
}

/// A unit of work tracked through the four board columns
///
/// # Invariants
/// - Title is never empty
/// - Status is always one of the four enumerated values
/// - `assigned_to` names a known, active agent at creation time; it may
///   dangle afterwards, since deactivating the agent does not cascade here
///
/// Tasks are never deleted; the only mutation after creation is the
/// status change applied by the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    id: Uuid,
    title: String,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    assigned_to: String,
    due_date: Option<NaiveDate>,
    tags: Vec<String>,
    created_by: String,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task from form input
    ///
    /// # Business Rules Enforced
    /// - Title must not be empty or whitespace-only
    /// - Initial status is always `todo`
    /// - Tags start empty; `created_by` is the local user label
    ///
    /// Referential checks on the assignee belong to the board, which can
    /// see the registry; this constructor validates fields only.
    pub(crate) fn new(input: NewTask) -> ValidationResult<Self> {
        if input.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            status: TaskStatus::Todo,
            priority: input.priority,
            assigned_to: input.assigned_to,
            due_date: input.due_date,
            tags: Vec::new(),
            created_by: "You".to_string(),
            created_at: Utc::now(),
        })
    }

    /// Reconstructs a task from already-validated parts
    ///
    /// Bypasses creation rules; only for seeding demo data.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        title: &str,
        description: &str,
        status: TaskStatus,
        priority: TaskPriority,
        assigned_to: &str,
        created_by: &str,
        due_date: Option<NaiveDate>,
        tags: &[&str],
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            status,
            priority,
            assigned_to: assigned_to.to_string(),
            due_date,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_by: created_by.to_string(),
            created_at: Utc::now(),
        }
    }

    pub(crate) fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    // ===== Getters =====

    /// Returns the task's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the task's title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task's description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the board column the task sits in
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the task's priority
    pub fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the assigned agent's id
    ///
    /// The reference may dangle if the agent was deactivated after
    /// assignment; display falls back to a placeholder in that case.
    pub fn assigned_to(&self) -> &str {
        &self.assigned_to
    }

    /// Returns the due date if one was set
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the task's tags
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the display label of the task's originator
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
