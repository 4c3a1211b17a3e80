//! Shared world state for task list BDD scenarios.

use std::sync::Arc;

use eyre::WrapErr;
use mockable::DefaultClock;
use rstest::fixture;
use tasklist::task::{
    adapters::memory::{InMemoryReminderScheduler, InMemorySeedSource, InMemoryTaskStore},
    domain::{Task, TaskId},
    services::{BootstrapOutcome, CoordinatorError, TaskListCoordinator},
};

/// Coordinator type used by the BDD world.
pub type TestCoordinator = TaskListCoordinator<
    InMemoryTaskStore,
    InMemorySeedSource,
    InMemoryReminderScheduler,
    DefaultClock,
>;

/// Scenario world for task list behaviour tests.
pub struct TaskListWorld {
    pub seed: Option<InMemorySeedSource>,
    pub coordinator: Option<TestCoordinator>,
    pub bootstrap_outcome: Option<BootstrapOutcome>,
    pub last_save: Option<Result<Task, CoordinatorError>>,
}

impl TaskListWorld {
    /// Creates a world with no seed source configured.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seed: None,
            coordinator: None,
            bootstrap_outcome: None,
            last_save: None,
        }
    }

    /// Returns the coordinator, failing when no step has created it.
    ///
    /// # Errors
    ///
    /// Returns an error if the list has not been bootstrapped yet.
    pub fn coordinator(&mut self) -> Result<&mut TestCoordinator, eyre::Report> {
        self.coordinator
            .as_mut()
            .ok_or_else(|| eyre::eyre!("task list has not been bootstrapped in scenario"))
    }

    /// Finds the listed task with `title`.
    ///
    /// # Errors
    ///
    /// Returns an error if no listed task carries that title.
    pub fn task_titled(&mut self, title: &str) -> Result<TaskId, eyre::Report> {
        self.coordinator()?
            .all()
            .iter()
            .find(|task| task.title().as_str() == title)
            .map(Task::id)
            .ok_or_else(|| eyre::eyre!("no task titled {title:?}"))
    }
}

impl Default for TaskListWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a coordinator over a fresh store and `seed`.
#[must_use]
pub fn coordinator_with(seed: InMemorySeedSource) -> TestCoordinator {
    TaskListCoordinator::new(
        Arc::new(InMemoryTaskStore::new()),
        Arc::new(seed),
        Arc::new(InMemoryReminderScheduler::new()),
        Arc::new(DefaultClock),
    )
}

/// Bootstraps a coordinator over the world's pending seed source.
///
/// # Errors
///
/// Returns an error if no seed source is configured or bootstrapping fails.
pub fn bootstrap_world(world: &mut TaskListWorld) -> Result<(), eyre::Report> {
    let seed = world
        .seed
        .take()
        .ok_or_else(|| eyre::eyre!("missing seed source in scenario world"))?;
    let mut coordinator = coordinator_with(seed);
    let outcome = run_async(coordinator.bootstrap()).wrap_err("bootstrap task list")?;
    world.bootstrap_outcome = Some(outcome);
    world.coordinator = Some(coordinator);
    Ok(())
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskListWorld {
    TaskListWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
