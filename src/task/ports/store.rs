//! Storage port for durable task persistence.
//!
//! Stores expose immutable snapshots through [`TaskStore::fetch_all`] and
//! accept intended changes as an explicit [`ChangeSet`] through
//! [`TaskStore::commit`]. Nothing a caller does to a fetched [`Task`] reaches
//! the store until it is placed in a change set and committed.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A single pending change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Insert the task if its identifier is unseen, otherwise overwrite the
    /// mutable fields of the existing record.
    Upsert(Task),
    /// Remove the record with this identifier.
    Delete(TaskId),
}

impl Change {
    /// Returns the identifier the change applies to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        match self {
            Self::Upsert(task) => task.id(),
            Self::Delete(id) => *id,
        }
    }
}

/// Ordered batch of pending changes, applied as one unit on commit.
///
/// Later changes to an identifier replace earlier ones in the batch while
/// keeping the position of the first, so insertion order across distinct
/// identifiers is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    changes: Vec<Change>,
}

impl ChangeSet {
    /// Creates an empty change set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Records an insert-or-overwrite of `task`.
    pub fn create_or_update(&mut self, task: Task) {
        self.push(Change::Upsert(task));
    }

    /// Records the removal of the task with `id`.
    pub fn delete(&mut self, id: TaskId) {
        self.push(Change::Delete(id));
    }

    /// Returns `true` when nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Returns the number of pending changes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Iterates over pending changes in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, Change> {
        self.changes.iter()
    }

    fn push(&mut self, change: Change) {
        let id = change.task_id();
        match self.changes.iter_mut().find(|pending| pending.task_id() == id) {
            Some(slot) => *slot = change,
            None => self.changes.push(change),
        }
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a Change;
    type IntoIter = std::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Durable task collection.
///
/// Implementations assume a single writer; callers serialise commits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns every persisted task, newest `created_at` first.
    ///
    /// Tasks sharing a creation timestamp keep the order in which the store
    /// first inserted them.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] when the medium cannot be read.
    async fn fetch_all(&self) -> StorageResult<Vec<Task>>;

    /// Makes every change in `changes` durable as a single unit.
    ///
    /// An empty change set succeeds without touching the medium. On failure
    /// none of the changes are visible to later reads and the caller keeps
    /// the change set for a retry.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Commit`] when the batch cannot be written.
    async fn commit(&self, changes: &ChangeSet) -> StorageResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The backing medium could not be opened or prepared.
    #[error("failed to open task storage: {0}")]
    Open(Arc<dyn std::error::Error + Send + Sync>),

    /// Reading tasks failed.
    #[error("failed to read tasks: {0}")]
    Read(Arc<dyn std::error::Error + Send + Sync>),

    /// Committing a change set failed; nothing from the batch was persisted.
    #[error("failed to commit task changes: {0}")]
    Commit(Arc<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wraps an error raised while opening the medium.
    pub fn open(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Open(Arc::new(err))
    }

    /// Wraps an error raised while reading.
    pub fn read(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Read(Arc::new(err))
    }

    /// Wraps an error raised while committing.
    pub fn commit(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Commit(Arc::new(err))
    }
}
