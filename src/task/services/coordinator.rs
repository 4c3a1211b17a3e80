//! Service keeping the displayed task list in step with the store.

use crate::task::{
    adapters::ids::RandomTaskIdGenerator,
    domain::{Task, TaskDraft, TaskId, TaskTitle, ValidationError},
    ports::{
        ChangeSet, NetworkError, Reminder, ReminderScheduler, SeedSource, StorageError,
        TaskIdGenerator, TaskStore,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for task list operations.
#[derive(Debug, Error)]
pub enum CoordinatorError {
    /// The submitted draft failed validation; nothing was persisted.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The store failed; the in-memory list was not changed by the failed
    /// commit.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// No listed task has this identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// `bootstrap` has already run for this coordinator.
    #[error("task list already bootstrapped")]
    AlreadyBootstrapped,
}

/// Result type for coordinator operations.
pub type CoordinatorResult<T> = Result<T, CoordinatorError>;

/// What [`TaskListCoordinator::bootstrap`] did.
#[derive(Debug, Clone)]
pub enum BootstrapOutcome {
    /// The store already held tasks; no seed fetch was made.
    Loaded {
        /// Number of tasks loaded.
        count: usize,
    },
    /// The store was empty and has been seeded.
    Seeded {
        /// Number of tasks persisted from the seed.
        count: usize,
    },
    /// The store was empty and the seed fetch failed. The list stays empty.
    SeedFailed {
        /// Classified fetch failure.
        error: NetworkError,
    },
}

/// Holds the full task list and its search-filtered view.
///
/// Every mutation is committed to the store and followed by a full reload,
/// so the in-memory lists always mirror durable state. Operations take
/// `&mut self`; the coordinator is driven from one logical thread.
pub struct TaskListCoordinator<S, F, N, C, G = RandomTaskIdGenerator>
where
    S: TaskStore,
    F: SeedSource + ?Sized,
    N: ReminderScheduler,
    C: Clock + Send + Sync,
    G: TaskIdGenerator,
{
    store: Arc<S>,
    seed: Arc<F>,
    reminders: Arc<N>,
    clock: Arc<C>,
    ids: Arc<G>,
    all: Vec<Task>,
    filtered: Vec<Task>,
    query: Option<String>,
    bootstrapped: bool,
}

impl<S, F, N, C> TaskListCoordinator<S, F, N, C>
where
    S: TaskStore,
    F: SeedSource + ?Sized,
    N: ReminderScheduler,
    C: Clock + Send + Sync,
{
    /// Creates a coordinator with an empty list and random task identifiers.
    #[must_use]
    pub fn new(store: Arc<S>, seed: Arc<F>, reminders: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            store,
            seed,
            reminders,
            clock,
            ids: Arc::new(RandomTaskIdGenerator),
            all: Vec::new(),
            filtered: Vec::new(),
            query: None,
            bootstrapped: false,
        }
    }
}

impl<S, F, N, C, G> TaskListCoordinator<S, F, N, C, G>
where
    S: TaskStore,
    F: SeedSource + ?Sized,
    N: ReminderScheduler,
    C: Clock + Send + Sync,
    G: TaskIdGenerator,
{
    /// Replaces the identifier generator used for new tasks.
    #[must_use]
    pub fn with_id_generator<H: TaskIdGenerator>(
        self,
        ids: Arc<H>,
    ) -> TaskListCoordinator<S, F, N, C, H> {
        TaskListCoordinator {
            store: self.store,
            seed: self.seed,
            reminders: self.reminders,
            clock: self.clock,
            ids,
            all: self.all,
            filtered: self.filtered,
            query: self.query,
            bootstrapped: self.bootstrapped,
        }
    }

    /// Returns every task, newest first.
    #[must_use]
    pub fn all(&self) -> &[Task] {
        &self.all
    }

    /// Returns the tasks matching the current query, in list order.
    #[must_use]
    pub fn filtered(&self) -> &[Task] {
        &self.filtered
    }

    /// Returns the current query, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the listed task with `id`.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.all.iter().find(|task| task.id() == id)
    }

    /// Reloads every task from the store and reapplies the query.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::Storage`] when the store cannot be read;
    /// both lists are then left empty.
    pub async fn reload(&mut self) -> CoordinatorResult<()> {
        match self.store.fetch_all().await {
            Ok(tasks) => {
                self.all = tasks;
                self.refilter();
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to load tasks");
                self.all.clear();
                self.filtered.clear();
                Err(err.into())
            }
        }
    }

    /// Sets the search query and recomputes the filtered view.
    ///
    /// An absent or empty query shows every task. Otherwise tasks whose
    /// title contains the query, ignoring case, are shown in list order.
    pub fn set_query(&mut self, query: Option<&str>) {
        self.query = query.filter(|text| !text.is_empty()).map(str::to_owned);
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = match self.query.as_deref() {
            None => self.all.clone(),
            Some(query) => {
                let needle = query.to_lowercase();
                self.all
                    .iter()
                    .filter(|task| task.title().contains_lowercase(&needle))
                    .cloned()
                    .collect()
            }
        };
    }

    /// Loads the list and, when the store is empty, seeds it once.
    ///
    /// A failed seed fetch is not an error: it is logged and reported as
    /// [`BootstrapOutcome::SeedFailed`], leaving the list empty.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::AlreadyBootstrapped`] on a second
    /// successful call, or [`CoordinatorError::Storage`] when loading or
    /// committing the seed fails. A failure of the initial load leaves the
    /// coordinator unbootstrapped so the call may be retried.
    pub async fn bootstrap(&mut self) -> CoordinatorResult<BootstrapOutcome> {
        if self.bootstrapped {
            return Err(CoordinatorError::AlreadyBootstrapped);
        }
        self.reload().await?;
        self.bootstrapped = true;

        if !self.all.is_empty() {
            let count = self.all.len();
            info!(count, "loaded stored tasks");
            return Ok(BootstrapOutcome::Loaded { count });
        }

        let records = match self.seed.fetch_seed_tasks().await {
            Ok(records) => records,
            Err(error) => {
                warn!(%error, "seed fetch failed; continuing with an empty list");
                return Ok(BootstrapOutcome::SeedFailed { error });
            }
        };

        let created_at = self.clock.utc();
        let mut changes = ChangeSet::new();
        for record in records {
            let remote_id = record.id;
            match record.into_task(created_at) {
                Ok(task) => changes.create_or_update(task),
                Err(err) => warn!(remote_id, error = %err, "skipping seed record"),
            }
        }

        let count = changes.len();
        self.commit(&changes).await?;
        self.reload().await?;
        info!(count, "seeded task list");
        Ok(BootstrapOutcome::Seeded { count })
    }

    /// Creates or edits a task from a user draft.
    ///
    /// A draft naming a listed task edits it and keeps its creation time;
    /// any other draft creates a task with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::Validation`] before touching the store
    /// when the title is blank, or [`CoordinatorError::Storage`] when the
    /// commit or the reload after it fails. Once the commit succeeds the
    /// reminder is synchronised even if the reload then fails.
    pub async fn upsert(&mut self, draft: TaskDraft) -> CoordinatorResult<Task> {
        let title = TaskTitle::new(draft.title())?;
        let existing = draft.id().and_then(|id| self.find(id)).cloned();

        let base = match existing {
            Some(current) => current.with_title(title),
            None => Task::new(self.fresh_id(), title, &*self.clock),
        };
        let task = base
            .with_description(draft.description().map(str::to_owned))
            .with_completed(draft.completed())
            .with_reminder_at(draft.reminder_at());

        let mut changes = ChangeSet::new();
        changes.create_or_update(task.clone());
        self.commit(&changes).await?;
        debug!(task_id = %task.id(), "saved task");

        self.sync_reminder(&task).await;
        self.reload().await?;
        Ok(task)
    }

    /// Flips the completion flag of the listed task with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::NotFound`] for an unlisted task or
    /// [`CoordinatorError::Storage`] when the commit or the reload after it
    /// fails.
    pub async fn toggle_completed(&mut self, id: TaskId) -> CoordinatorResult<Task> {
        let task = self
            .find(id)
            .ok_or(CoordinatorError::NotFound(id))?
            .toggled();

        let mut changes = ChangeSet::new();
        changes.create_or_update(task.clone());
        self.commit(&changes).await?;
        self.reload().await?;
        debug!(task_id = %id, completed = task.is_completed(), "toggled task");
        Ok(task)
    }

    /// Permanently deletes the listed task with `id` and cancels its
    /// reminder.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::NotFound`] for an unlisted task or
    /// [`CoordinatorError::Storage`] when the commit or the reload after it
    /// fails. The reminder is cancelled whenever the deletion was committed.
    pub async fn delete(&mut self, id: TaskId) -> CoordinatorResult<()> {
        if self.find(id).is_none() {
            return Err(CoordinatorError::NotFound(id));
        }

        let mut changes = ChangeSet::new();
        changes.delete(id);
        self.commit(&changes).await?;
        debug!(task_id = %id, "deleted task");

        if let Err(err) = self.reminders.cancel(id).await {
            warn!(task_id = %id, error = %err, "failed to cancel reminder");
        }
        self.reload().await
    }

    async fn commit(&self, changes: &ChangeSet) -> CoordinatorResult<()> {
        self.store.commit(changes).await.map_err(|err| {
            warn!(error = %err, "commit failed; keeping current list");
            err.into()
        })
    }

    async fn sync_reminder(&self, task: &Task) {
        let result = match task.pending_reminder(self.clock.utc()) {
            Some(fire_at) => {
                self.reminders
                    .schedule(&Reminder::for_task(task, fire_at))
                    .await
            }
            None => self.reminders.cancel(task.id()).await,
        };
        if let Err(err) = result {
            warn!(task_id = %task.id(), error = %err, "failed to update reminder");
        }
    }

    fn fresh_id(&self) -> TaskId {
        loop {
            let candidate = self.ids.next_id();
            if self.find(candidate).is_none() {
                return candidate;
            }
            debug!(task_id = %candidate, "generated identifier already in use");
        }
    }
}
