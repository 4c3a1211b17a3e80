//! Application services for task list orchestration.

mod coordinator;

pub use coordinator::{
    BootstrapOutcome, CoordinatorError, CoordinatorResult, TaskListCoordinator,
};
