//! Transport records received from the seed source.

use super::{Task, TaskId, TaskTitle, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope of the seed payload: `{ "todos": [...] }`.
///
/// Additional top-level fields (paging counters and the like) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTodoList {
    /// Records in payload order.
    pub todos: Vec<RemoteTodoRecord>,
}

/// A todo as published by the seed source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTodoRecord {
    /// Remote numeric identifier, reused as the local task identifier.
    pub id: i64,
    /// Todo text.
    pub todo: String,
    /// Remote completion flag.
    pub completed: bool,
    /// Owning user on the remote side. Not carried into the task.
    pub user_id: i64,
}

impl RemoteTodoRecord {
    /// Maps the record into a new task created at `created_at`.
    ///
    /// The description is left empty and no reminder is set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] when the todo text is blank.
    pub fn into_task(self, created_at: DateTime<Utc>) -> Result<Task, ValidationError> {
        let title = TaskTitle::new(self.todo)?;
        Ok(Task::new_at(TaskId::new(self.id), title, created_at).with_completed(self.completed))
    }
}
