//! Domain model for the task list.
//!
//! The task domain models locally created and remotely seeded tasks, the
//! drafts a user submits for them, and title validation, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod draft;
mod error;
mod ids;
mod remote;
mod task;

pub use draft::TaskDraft;
pub use error::ValidationError;
pub use ids::{TaskId, TaskTitle};
pub use remote::{RemoteTodoList, RemoteTodoRecord};
pub use task::{PersistedTaskData, Task};
