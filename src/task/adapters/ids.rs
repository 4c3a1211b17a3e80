//! Identifier generators for locally created tasks.

use crate::task::{domain::TaskId, ports::TaskIdGenerator};
use std::sync::atomic::{AtomicI64, Ordering};
use uuid::Uuid;

/// Draws positive 63-bit identifiers from random v4 UUIDs.
///
/// Random values this wide keep clear of the small integers used by seeded
/// records and of each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTaskIdGenerator;

impl TaskIdGenerator for RandomTaskIdGenerator {
    fn next_id(&self) -> TaskId {
        let (high, _) = Uuid::new_v4().as_u64_pair();
        let value = i64::try_from(high >> 1).unwrap_or(i64::MAX);
        TaskId::new(value.max(1))
    }
}

/// Hands out consecutive identifiers starting at a given value.
#[derive(Debug)]
pub struct SequentialTaskIdGenerator {
    next: AtomicI64,
}

impl SequentialTaskIdGenerator {
    /// Creates a generator whose first identifier is `start`.
    #[must_use]
    pub const fn starting_at(start: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
        }
    }
}

impl Default for SequentialTaskIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl TaskIdGenerator for SequentialTaskIdGenerator {
    fn next_id(&self) -> TaskId {
        TaskId::new(self.next.fetch_add(1, Ordering::SeqCst))
    }
}
