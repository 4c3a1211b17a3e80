//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> BigInt,
        /// Store-assigned insertion sequence, used to order equal timestamps.
        sequence -> BigInt,
        /// Non-empty title.
        title -> Text,
        /// Optional description.
        description -> Nullable<Text>,
        /// Creation timestamp in nanoseconds since the Unix epoch.
        created_at -> BigInt,
        /// Completion flag.
        completed -> Bool,
        /// Optional reminder timestamp in nanoseconds since the Unix epoch.
        reminder_at -> Nullable<BigInt>,
    }
}

/// DDL applied when a store is opened.
pub(super) const CREATE_TASKS_TABLE: &str = concat!(
    "CREATE TABLE IF NOT EXISTS tasks (",
    "id INTEGER PRIMARY KEY NOT NULL, ",
    "sequence BIGINT NOT NULL, ",
    "title TEXT NOT NULL CHECK (length(trim(title)) > 0), ",
    "description TEXT, ",
    "created_at BIGINT NOT NULL, ",
    "completed BOOLEAN NOT NULL DEFAULT 0, ",
    "reminder_at BIGINT",
    ")",
);

/// Index supporting the newest-first listing order.
pub(super) const CREATE_TASKS_ORDER_INDEX: &str = concat!(
    "CREATE INDEX IF NOT EXISTS idx_tasks_created_at_sequence ",
    "ON tasks (created_at DESC, sequence ASC)",
);
