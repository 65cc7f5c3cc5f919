//! `PostgreSQL` implementation of the remote task store.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        NewTask, PersistedTaskData, Task, TaskDescription, TaskId, TaskPatch, TaskStatus,
        TaskTitle,
    },
    ports::{RemoteStoreError, RemoteStoreResult, RemoteTaskStore},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by the task store.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed remote task store.
#[derive(Debug, Clone)]
pub struct PostgresRemoteTaskStore {
    pool: TaskPgPool,
}

impl PostgresRemoteTaskStore {
    /// Creates a store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> RemoteStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RemoteStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(|err| {
                RemoteStoreError::Unavailable(format!("connection pool exhausted: {err}"))
            })?;
            f(&mut connection)
        })
        .await
        .map_err(RemoteStoreError::persistence)?
    }
}

#[async_trait]
impl RemoteTaskStore for PostgresRemoteTaskStore {
    async fn list(&self) -> RemoteStoreResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::created_at.desc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(RemoteStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn insert(&self, task: &NewTask) -> RemoteStoreResult<Task> {
        let new_row = NewTaskRow {
            title: task.title.as_str().to_owned(),
            description: task.description.as_ref().map(|text| text.as_str().to_owned()),
            status: task.status.as_str().to_owned(),
        };
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(RemoteStoreError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn update_by_id(&self, id: TaskId, patch: &TaskPatch) -> RemoteStoreResult<Task> {
        let changeset = to_changeset(patch);
        self.run_blocking(move |connection| {
            let row = diesel::update(tasks::table.find(id.into_inner()))
                .set((&changeset, tasks::updated_at.eq(diesel::dsl::now)))
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(RemoteStoreError::persistence)?
                .ok_or(RemoteStoreError::NotFound(id))?;
            row_to_task(row)
        })
        .await
    }

    async fn delete_by_id(&self, id: TaskId) -> RemoteStoreResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(RemoteStoreError::persistence)?;
            if deleted == 0 {
                return Err(RemoteStoreError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn get_by_id(&self, id: TaskId) -> RemoteStoreResult<Task> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(RemoteStoreError::persistence)?
                .ok_or(RemoteStoreError::NotFound(id))?;
            row_to_task(row)
        })
        .await
    }
}

fn to_changeset(patch: &TaskPatch) -> TaskChangeset {
    TaskChangeset {
        title: patch.title.as_ref().map(|title| title.as_str().to_owned()),
        description: patch.description.as_ref().map(|description| {
            description
                .as_ref()
                .map(|text| text.as_str().to_owned())
        }),
        status: patch.status.map(|status| status.as_str().to_owned()),
    }
}

fn row_to_task(row: TaskRow) -> RemoteStoreResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        status: persisted_status,
        created_at,
        updated_at,
    } = row;

    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(RemoteStoreError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        title: TaskTitle::from_persisted(title),
        description: TaskDescription::from_persisted(description),
        status,
        created_at,
        updated_at,
    }))
}
