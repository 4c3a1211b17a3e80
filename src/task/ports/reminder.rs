//! Reminder port for local alerts tied to tasks.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type for reminder operations.
pub type ReminderResult<T> = Result<T, ReminderError>;

/// A local alert scheduled for a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    /// Task the alert belongs to. At most one alert is pending per task.
    pub task_id: TaskId,
    /// When the alert fires.
    pub fire_at: DateTime<Utc>,
    /// Alert title, taken from the task title.
    pub title: String,
    /// Alert body, taken from the task description.
    pub body: String,
}

impl Reminder {
    /// Builds the alert for `task` firing at `fire_at`.
    #[must_use]
    pub fn for_task(task: &Task, fire_at: DateTime<Utc>) -> Self {
        Self {
            task_id: task.id(),
            fire_at,
            title: task.title().as_str().to_owned(),
            body: task.description().unwrap_or_default().to_owned(),
        }
    }
}

/// Host notification facility.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReminderScheduler: Send + Sync {
    /// Schedules `reminder`, replacing any pending alert for the same task.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::Rejected`] when the host refuses the alert.
    async fn schedule(&self, reminder: &Reminder) -> ReminderResult<()>;

    /// Cancels the pending alert for `task_id`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderError::Rejected`] when the host refuses the request.
    async fn cancel(&self, task_id: TaskId) -> ReminderResult<()>;
}

/// Errors returned by reminder schedulers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReminderError {
    /// The host notification facility rejected the request.
    #[error("reminder rejected for task {task_id}: {reason}")]
    Rejected {
        /// Task the request concerned.
        task_id: TaskId,
        /// Host-provided reason.
        reason: String,
    },
}
