//! Task entity.

use super::{TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// Tasks are plain value snapshots: stores hand out copies and accept
/// changed copies back through a
/// [`ChangeSet`](crate::task::ports::ChangeSet). The serialised form is the
/// external record shape
/// `{ id, title, description, createdAt, completed, reminderAt }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    created_at: DateTime<Utc>,
    completed: bool,
    reminder_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted reminder timestamp, if any.
    pub reminder_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new open task stamped with the current clock time.
    #[must_use]
    pub fn new(id: TaskId, title: TaskTitle, clock: &impl Clock) -> Self {
        Self::new_at(id, title, clock.utc())
    }

    /// Creates a new open task with an explicit creation timestamp.
    #[must_use]
    pub const fn new_at(id: TaskId, title: TaskTitle, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            description: None,
            created_at,
            completed: false,
            reminder_at: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            created_at: data.created_at,
            completed: data.completed,
            reminder_at: data.reminder_at,
        }
    }

    /// Decomposes the task into its persisted fields.
    #[must_use]
    pub fn into_persisted(self) -> PersistedTaskData {
        PersistedTaskData {
            id: self.id,
            title: self.title,
            description: self.description,
            created_at: self.created_at,
            completed: self.completed,
            reminder_at: self.reminder_at,
        }
    }

    /// Sets the description. Blank text clears it.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|text| !text.trim().is_empty());
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Sets or clears the reminder timestamp.
    #[must_use]
    pub const fn with_reminder_at(mut self, reminder_at: Option<DateTime<Utc>>) -> Self {
        self.reminder_at = reminder_at;
        self
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = title;
        self
    }

    /// Returns a copy with the completion flag inverted.
    #[must_use]
    pub fn toggled(&self) -> Self {
        self.clone().with_completed(!self.completed)
    }

    /// Returns `incoming` with this task's creation timestamp.
    ///
    /// Used by stores when overwriting an existing record so `created_at`
    /// never changes after creation.
    #[must_use]
    pub fn overwritten_by(&self, incoming: &Self) -> Self {
        Self {
            created_at: self.created_at,
            ..incoming.clone()
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the reminder timestamp, if any.
    #[must_use]
    pub const fn reminder_at(&self) -> Option<DateTime<Utc>> {
        self.reminder_at
    }

    /// Returns the reminder timestamp when it lies strictly after `now`.
    #[must_use]
    pub fn pending_reminder(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.reminder_at.filter(|at| *at > now)
    }
}
