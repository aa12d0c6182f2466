pub mod task;

// Export the task types for use throughout the app
pub use task::{Priority, Task, TaskStatus};
