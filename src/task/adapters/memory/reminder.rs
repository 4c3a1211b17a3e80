//! In-memory reminder scheduler.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::TaskId,
    ports::{Reminder, ReminderError, ReminderResult, ReminderScheduler},
};

/// Reminder scheduler that records pending alerts keyed by task.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReminderScheduler {
    pending: Arc<RwLock<BTreeMap<TaskId, Reminder>>>,
}

impl InMemoryReminderScheduler {
    /// Creates a scheduler with no pending alerts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pending alerts ordered by task identifier.
    ///
    /// A poisoned lock yields an empty list.
    #[must_use]
    pub fn pending(&self) -> Vec<Reminder> {
        self.pending
            .read()
            .map(|pending| pending.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the pending alert for `task_id`, if any.
    #[must_use]
    pub fn pending_for(&self, task_id: TaskId) -> Option<Reminder> {
        self.pending
            .read()
            .ok()
            .and_then(|pending| pending.get(&task_id).cloned())
    }
}

fn lock_error(task_id: TaskId, err: &impl ToString) -> ReminderError {
    ReminderError::Rejected {
        task_id,
        reason: err.to_string(),
    }
}

#[async_trait]
impl ReminderScheduler for InMemoryReminderScheduler {
    async fn schedule(&self, reminder: &Reminder) -> ReminderResult<()> {
        let mut pending = self
            .pending
            .write()
            .map_err(|err| lock_error(reminder.task_id, &err))?;
        pending.insert(reminder.task_id, reminder.clone());
        Ok(())
    }

    async fn cancel(&self, task_id: TaskId) -> ReminderResult<()> {
        let mut pending = self
            .pending
            .write()
            .map_err(|err| lock_error(task_id, &err))?;
        pending.remove(&task_id);
        Ok(())
    }
}
