//! Shared test helpers for in-memory task list integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tasklist::task::{
    adapters::{
        ids::SequentialTaskIdGenerator,
        memory::{InMemoryReminderScheduler, InMemorySeedSource, InMemoryTaskStore},
    },
    domain::RemoteTodoRecord,
    services::TaskListCoordinator,
};

/// Coordinator wired entirely to in-memory adapters.
pub type TestCoordinator = TaskListCoordinator<
    InMemoryTaskStore,
    InMemorySeedSource,
    InMemoryReminderScheduler,
    DefaultClock,
    SequentialTaskIdGenerator,
>;

/// Handles to the adapters behind a [`TestCoordinator`].
pub struct TaskListHarness {
    pub store: Arc<InMemoryTaskStore>,
    pub seed: Arc<InMemorySeedSource>,
    pub reminders: Arc<InMemoryReminderScheduler>,
    pub coordinator: TestCoordinator,
}

impl TaskListHarness {
    /// Wires a coordinator over `store` with the given seed source.
    #[must_use]
    pub fn over(store: Arc<InMemoryTaskStore>, seed: InMemorySeedSource) -> Self {
        let seed = Arc::new(seed);
        let reminders = Arc::new(InMemoryReminderScheduler::new());
        let coordinator = TaskListCoordinator::new(
            Arc::clone(&store),
            Arc::clone(&seed),
            Arc::clone(&reminders),
            Arc::new(DefaultClock),
        )
        .with_id_generator(Arc::new(SequentialTaskIdGenerator::starting_at(500)));
        Self {
            store,
            seed,
            reminders,
            coordinator,
        }
    }

    /// Opens a second coordinator over the same store, as after a relaunch.
    #[must_use]
    pub fn relaunch(&self) -> Self {
        Self::over(
            Arc::clone(&self.store),
            InMemorySeedSource::with_records(sample_records()),
        )
    }
}

/// Builds a remote record with the given id and text.
#[must_use]
pub fn record(id: i64, todo: &str, completed: bool) -> RemoteTodoRecord {
    RemoteTodoRecord {
        id,
        todo: todo.to_owned(),
        completed,
        user_id: 26,
    }
}

/// Three records shaped like the public to-do feed.
#[must_use]
pub fn sample_records() -> Vec<RemoteTodoRecord> {
    vec![
        record(1, "Do something nice for someone you care about", false),
        record(2, "Memorize a poem", true),
        record(3, "Watch a classic movie", false),
    ]
}

/// Provides a harness over an empty store seeded with [`sample_records`].
#[fixture]
pub fn harness() -> TaskListHarness {
    TaskListHarness::over(
        Arc::new(InMemoryTaskStore::new()),
        InMemorySeedSource::with_records(sample_records()),
    )
}
