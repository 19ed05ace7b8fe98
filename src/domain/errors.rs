use thiserror::Error;

/// Errors raised when user input fails domain validation
///
/// These surface to the initiating UI action only. They are never fatal
/// and are not reported through any central sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("task title cannot be empty")]
    EmptyTitle,

    #[error("message text cannot be empty")]
    EmptyMessage,

    #[error("unknown agent: {0}")]
    UnknownAssignee(String),

    #[error("agent is not active: {0}")]
    InactiveAssignee(String),
}

pub type ValidationResult<T> = Result<T, ValidationError>;
