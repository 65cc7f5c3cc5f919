//! Client contract for the remote table of task rows.

use crate::task::domain::{NewTask, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote task store operations.
pub type RemoteStoreResult<T> = Result<T, RemoteStoreError>;

/// Remote row store holding the authoritative task table.
#[async_trait]
pub trait RemoteTaskStore: Send + Sync {
    /// Lists every task ordered by `created_at`, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError`] when the store cannot be reached or the
    /// query fails.
    async fn list(&self) -> RemoteStoreResult<Vec<Task>>;

    /// Inserts a task row and returns it with store-assigned id and
    /// timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError`] when the insert fails.
    async fn insert(&self, task: &NewTask) -> RemoteStoreResult<Task>;

    /// Writes the present fields of `patch` to the row and returns the
    /// refreshed row.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::NotFound`] when no row has the given id.
    async fn update_by_id(&self, id: TaskId, patch: &TaskPatch) -> RemoteStoreResult<Task>;

    /// Deletes the row with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::NotFound`] when no row has the given id.
    async fn delete_by_id(&self, id: TaskId) -> RemoteStoreResult<()>;

    /// Reads a single row by id.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::NotFound`] when no row has the given id.
    async fn get_by_id(&self, id: TaskId) -> RemoteStoreResult<Task>;
}

/// Errors returned by remote task store implementations.
#[derive(Debug, Clone, Error)]
pub enum RemoteStoreError {
    /// No row has the requested identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The store could not be reached.
    #[error("remote store unavailable: {0}")]
    Unavailable(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RemoteStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
