//! Port contracts for the task list.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod ids;
pub mod reminder;
pub mod seed;
pub mod store;

pub use ids::TaskIdGenerator;
pub use reminder::{Reminder, ReminderError, ReminderResult, ReminderScheduler};
pub use seed::{NetworkError, NetworkResult, SeedSource};
pub use store::{Change, ChangeSet, StorageError, StorageResult, TaskStore};

#[cfg(test)]
pub use reminder::MockReminderScheduler;
#[cfg(test)]
pub use seed::MockSeedSource;
#[cfg(test)]
pub use store::MockTaskStore;
