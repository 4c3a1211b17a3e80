//! In-memory adapters for tests and ephemeral sessions.

mod reminder;
mod seed;
mod store;

pub use reminder::InMemoryReminderScheduler;
pub use seed::InMemorySeedSource;
pub use store::InMemoryTaskStore;
