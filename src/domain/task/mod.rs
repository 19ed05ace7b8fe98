// Task board domain module
// Contains the task aggregate, value objects, domain events, and the board

pub mod board;
pub mod events;
pub mod task;
pub mod value_objects;

// Re-export main types for convenience
pub use board::TaskBoard;
pub use events::TaskEvent;
pub use task::{NewTask, Task};
pub use value_objects::{TaskPriority, TaskStatus};
