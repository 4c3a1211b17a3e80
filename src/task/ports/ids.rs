//! Identifier allocation port for locally created tasks.

use crate::task::domain::TaskId;

/// Source of identifiers for new local tasks.
///
/// Generators need not know which identifiers are taken; the coordinator
/// draws again when a value collides with a listed task.
pub trait TaskIdGenerator: Send + Sync {
    /// Returns the next candidate identifier.
    fn next_id(&self) -> TaskId;
}
