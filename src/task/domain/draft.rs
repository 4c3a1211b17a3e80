//! User-submitted task edits prior to validation.

use super::{Task, TaskId};
use chrono::{DateTime, Utc};

/// Unvalidated task fields as entered by the user.
///
/// A draft without an identifier describes a new task; a draft carrying the
/// identifier of a listed task describes an edit of that task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    id: Option<TaskId>,
    title: String,
    description: Option<String>,
    completed: bool,
    reminder_at: Option<DateTime<Utc>>,
}

impl TaskDraft {
    /// Creates a draft for a new task.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            completed: false,
            reminder_at: None,
        }
    }

    /// Creates a draft pre-filled from an existing task, for editing.
    #[must_use]
    pub fn for_task(task: &Task) -> Self {
        Self {
            id: Some(task.id()),
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            completed: task.is_completed(),
            reminder_at: task.reminder_at(),
        }
    }

    /// Replaces the title text.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Clears the description.
    #[must_use]
    pub fn without_description(mut self) -> Self {
        self.description = None;
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

    /// Returns the identifier of the edited task, if any.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the raw title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw description text.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the requested completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the requested reminder timestamp.
    #[must_use]
    pub const fn reminder_at(&self) -> Option<DateTime<Utc>> {
        self.reminder_at
    }
}
