//! Diesel row models for task persistence.

use super::schema::tasks;
use diesel::prelude::*;

/// Query result row for task records.
///
/// The insertion sequence only orders the query and is not selected.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation timestamp in nanoseconds.
    pub created_at: i64,
    /// Completion flag.
    pub completed: bool,
    /// Optional reminder timestamp in nanoseconds.
    pub reminder_at: Option<i64>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: i64,
    /// Insertion sequence.
    pub sequence: i64,
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation timestamp in nanoseconds.
    pub created_at: i64,
    /// Completion flag.
    pub completed: bool,
    /// Optional reminder timestamp in nanoseconds.
    pub reminder_at: Option<i64>,
}

/// Mutable columns written when overwriting an existing record.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangesetRow {
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Completion flag.
    pub completed: bool,
    /// Optional reminder timestamp in nanoseconds.
    pub reminder_at: Option<i64>,
}
