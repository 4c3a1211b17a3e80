//! `SQLite` store implementation for task persistence.

use super::{
    models::{NewTaskRow, TaskChangesetRow, TaskRow},
    schema::{CREATE_TASKS_ORDER_INDEX, CREATE_TASKS_TABLE, tasks},
};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskTitle},
    ports::{Change, ChangeSet, StorageError, StorageResult, TaskStore},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;
use diesel::sqlite::SqliteConnection;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// `SQLite` connection pool type used by the task store.
pub type TaskSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// `SQLite`-backed task store.
///
/// Each commit runs inside one SQL transaction. The pool holds a single
/// connection, matching the single-writer contract of [`TaskStore`].
///
/// Timestamps are stored as nanoseconds since the Unix epoch, which limits
/// `created_at` and `reminder_at` to the years 1677 through 2262. A batch
/// holding a task outside that range fails with [`StorageError::Commit`]
/// and nothing from it is written.
#[derive(Debug, Clone)]
pub struct SqliteTaskStore {
    pool: TaskSqlitePool,
}

/// Timestamp that cannot be represented as nanoseconds since the epoch.
#[derive(Debug, Error)]
#[error("timestamp {0} is outside the storable range")]
struct UnstorableTimestamp(DateTime<Utc>);

#[derive(Debug, Clone, Copy)]
enum Access {
    Read,
    Commit,
}

impl Access {
    fn wrap(self, err: impl std::error::Error + Send + Sync + 'static) -> StorageError {
        match self {
            Self::Read => StorageError::read(err),
            Self::Commit => StorageError::commit(err),
        }
    }
}

#[derive(Debug, Clone)]
enum RowChange {
    Upsert(NewTaskRow),
    Delete(i64),
}

impl SqliteTaskStore {
    /// Creates a store from a pool whose database already has the schema.
    #[must_use]
    pub const fn new(pool: TaskSqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if needed) the database at `database_url` and
    /// prepares the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Open`] when the file cannot be opened or the
    /// schema cannot be created.
    pub fn open(database_url: &str) -> StorageResult<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let pool = Pool::builder()
            .max_size(1)
            .connection_timeout(CONNECTION_TIMEOUT)
            .build(manager)
            .map_err(StorageError::open)?;
        {
            let mut connection = pool.get().map_err(StorageError::open)?;
            prepare_schema(&mut connection)?;
        }
        debug!(database_url, "opened task database");
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, access: Access, f: F) -> StorageResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> StorageResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(|err| access.wrap(err))?;
            f(&mut connection)
        })
        .await
        .map_err(|err| access.wrap(err))?
    }
}

fn prepare_schema(connection: &mut SqliteConnection) -> StorageResult<()> {
    diesel::sql_query(CREATE_TASKS_TABLE)
        .execute(connection)
        .map_err(StorageError::open)?;
    diesel::sql_query(CREATE_TASKS_ORDER_INDEX)
        .execute(connection)
        .map_err(StorageError::open)?;
    Ok(())
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn fetch_all(&self) -> StorageResult<Vec<Task>> {
        self.run_blocking(Access::Read, |connection| {
            let rows = tasks::table
                .order((tasks::created_at.desc(), tasks::sequence.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(StorageError::read)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn commit(&self, changes: &ChangeSet) -> StorageResult<()> {
        if changes.is_empty() {
            return Ok(());
        }
        let planned = changes
            .iter()
            .map(to_row_change)
            .collect::<StorageResult<Vec<_>>>()?;
        let count = planned.len();

        self.run_blocking(Access::Commit, move |connection| {
            connection
                .transaction::<_, DieselError, _>(|tx| apply_row_changes(tx, &planned))
                .map_err(StorageError::commit)
        })
        .await?;
        debug!(count, "committed task changes");
        Ok(())
    }
}

fn apply_row_changes(
    connection: &mut SqliteConnection,
    changes: &[RowChange],
) -> Result<(), DieselError> {
    let mut next_sequence = tasks::table
        .select(diesel::dsl::max(tasks::sequence))
        .first::<Option<i64>>(connection)?
        .map_or(0, |max| max.saturating_add(1));

    for change in changes {
        match change {
            RowChange::Upsert(row) => {
                let updated = diesel::update(tasks::table.find(row.id))
                    .set(&changeset_for(row))
                    .execute(connection)?;
                if updated == 0 {
                    let inserted = NewTaskRow {
                        sequence: next_sequence,
                        ..row.clone()
                    };
                    next_sequence = next_sequence.saturating_add(1);
                    diesel::insert_into(tasks::table)
                        .values(&inserted)
                        .execute(connection)?;
                }
            }
            RowChange::Delete(id) => {
                diesel::delete(tasks::table.find(*id)).execute(connection)?;
            }
        }
    }
    Ok(())
}

fn changeset_for(row: &NewTaskRow) -> TaskChangesetRow {
    TaskChangesetRow {
        title: row.title.clone(),
        description: row.description.clone(),
        completed: row.completed,
        reminder_at: row.reminder_at,
    }
}

fn to_row_change(change: &Change) -> StorageResult<RowChange> {
    match change {
        Change::Upsert(task) => to_new_row(task).map(RowChange::Upsert),
        Change::Delete(id) => Ok(RowChange::Delete(id.value())),
    }
}

fn to_new_row(task: &Task) -> StorageResult<NewTaskRow> {
    let reminder_at = task
        .reminder_at()
        .map(to_nanos)
        .transpose()
        .map_err(StorageError::commit)?;
    Ok(NewTaskRow {
        id: task.id().value(),
        sequence: 0,
        title: task.title().as_str().to_owned(),
        description: task.description().map(str::to_owned),
        created_at: to_nanos(task.created_at()).map_err(StorageError::commit)?,
        completed: task.is_completed(),
        reminder_at,
    })
}

fn to_nanos(timestamp: DateTime<Utc>) -> Result<i64, UnstorableTimestamp> {
    timestamp
        .timestamp_nanos_opt()
        .ok_or(UnstorableTimestamp(timestamp))
}

fn row_to_task(row: TaskRow) -> StorageResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        created_at,
        completed,
        reminder_at,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::new(id),
        title: TaskTitle::new(title).map_err(StorageError::read)?,
        description,
        created_at: DateTime::from_timestamp_nanos(created_at),
        completed,
        reminder_at: reminder_at.map(DateTime::from_timestamp_nanos),
    };
    Ok(Task::from_persisted(data))
}
