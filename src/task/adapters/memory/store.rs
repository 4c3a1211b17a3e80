//! In-memory task store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{Change, ChangeSet, StorageError, StorageResult, TaskStore},
};

/// Thread-safe in-memory task store.
///
/// Commits are applied to a copy of the current state which then replaces
/// it, so a batch is either fully visible or not at all.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Clone, Default)]
struct InMemoryStoreState {
    records: HashMap<TaskId, StoredTask>,
    next_sequence: u64,
    commits: usize,
}

#[derive(Debug, Clone)]
struct StoredTask {
    sequence: u64,
    task: Task,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of non-empty commits applied so far.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the state lock is poisoned.
    pub fn commit_count(&self) -> StorageResult<usize> {
        let state = self.state.read().map_err(|err| {
            StorageError::read(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.commits)
    }
}

impl InMemoryStoreState {
    fn apply(&mut self, change: &Change) {
        match change {
            Change::Upsert(task) => match self.records.get_mut(&task.id()) {
                Some(existing) => existing.task = existing.task.overwritten_by(task),
                None => {
                    let sequence = self.next_sequence;
                    self.next_sequence += 1;
                    self.records.insert(
                        task.id(),
                        StoredTask {
                            sequence,
                            task: task.clone(),
                        },
                    );
                }
            },
            Change::Delete(id) => {
                self.records.remove(id);
            }
        }
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn fetch_all(&self) -> StorageResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            StorageError::read(std::io::Error::other(err.to_string()))
        })?;
        let mut stored: Vec<&StoredTask> = state.records.values().collect();
        stored.sort_by(|left, right| {
            right
                .task
                .created_at()
                .cmp(&left.task.created_at())
                .then(left.sequence.cmp(&right.sequence))
        });
        Ok(stored.into_iter().map(|entry| entry.task.clone()).collect())
    }

    async fn commit(&self, changes: &ChangeSet) -> StorageResult<()> {
        if changes.is_empty() {
            return Ok(());
        }
        let mut state = self.state.write().map_err(|err| {
            StorageError::commit(std::io::Error::other(err.to_string()))
        })?;

        let mut next = state.clone();
        for change in changes {
            next.apply(change);
        }
        next.commits += 1;
        *state = next;
        Ok(())
    }
}
