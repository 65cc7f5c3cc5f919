//! Detail resolver: one task by identifier, local first.

use super::store::{TaskSnapshot, TaskStore, TaskStoreError, UpdateTaskRequest};
use crate::task::{
    domain::{Task, TaskId},
    ports::{OutcomeNotifier, RemoteTaskStore},
};
use std::sync::Arc;
use thiserror::Error;

/// Resolution state of the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    /// Resolution is in progress.
    Loading,
    /// The task was found, locally or remotely.
    Found(Task),
    /// The task exists neither locally nor remotely.
    NotFound,
}

impl DetailState {
    /// Returns the resolved task, if any.
    #[must_use]
    pub const fn task(&self) -> Option<&Task> {
        match self {
            Self::Found(task) => Some(task),
            Self::Loading | Self::NotFound => None,
        }
    }
}

/// Where the detail view goes after a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailExit {
    /// Navigate back to the board.
    ReturnToBoard,
}

/// Errors returned by detail view actions.
#[derive(Debug, Clone, Error)]
pub enum DetailError {
    /// No task is resolved, so there is nothing to edit or delete.
    #[error("no task is resolved")]
    NothingResolved,

    /// The store rejected the action.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Looks `id` up in `snapshot` without touching the network.
#[must_use]
pub fn resolve_local(snapshot: &TaskSnapshot, id: TaskId) -> Option<Task> {
    snapshot.find(id).cloned()
}

/// Detail-side view state over the shared [`TaskStore`].
///
/// A task fetched remotely stays local to the resolver; it is never merged
/// into the store's collection.
pub struct DetailResolver<R, N>
where
    R: RemoteTaskStore,
    N: OutcomeNotifier,
{
    store: Arc<TaskStore<R, N>>,
    id: Option<TaskId>,
    state: DetailState,
}

impl<R, N> DetailResolver<R, N>
where
    R: RemoteTaskStore,
    N: OutcomeNotifier,
{
    /// Creates a resolver with nothing selected.
    #[must_use]
    pub const fn new(store: Arc<TaskStore<R, N>>) -> Self {
        Self {
            store,
            id: None,
            state: DetailState::Loading,
        }
    }

    /// Returns the identifier being resolved, if any.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the current resolution state.
    #[must_use]
    pub const fn state(&self) -> &DetailState {
        &self.state
    }

    /// Resolves `id`, preferring the store's collection.
    ///
    /// The state reads [`DetailState::Loading`] until resolution completes,
    /// including when the returned future is dropped early.
    ///
    /// A local hit issues no remote call; a miss issues exactly one
    /// [`TaskStore::fetch_one`]. A failed remote lookup resolves to
    /// [`DetailState::NotFound`].
    pub async fn resolve(&mut self, id: TaskId) -> &DetailState {
        self.id = Some(id);
        self.state = DetailState::Loading;
        let snapshot = self.store.snapshot();
        self.state = match resolve_local(&snapshot, id) {
            Some(task) => DetailState::Found(task),
            None => match self.store.fetch_one(id).await {
                Ok(task) => DetailState::Found(task),
                Err(TaskStoreError::NotFound(_)) => DetailState::NotFound,
                Err(err) => {
                    tracing::warn!(task_id = %id, error = %err, "task lookup failed");
                    DetailState::NotFound
                }
            },
        };
        &self.state
    }

    /// Re-resolves the current identifier against the latest snapshot.
    ///
    /// Call whenever the store publishes a new snapshot. Does nothing when
    /// no identifier is selected.
    pub async fn refresh(&mut self) -> &DetailState {
        if let Some(id) = self.id {
            return self.resolve(id).await;
        }
        &self.state
    }

    /// Saves edits to the resolved task through the store.
    ///
    /// On success the resolver shows the returned row.
    ///
    /// # Errors
    ///
    /// Returns [`DetailError::NothingResolved`] when no task is found, or
    /// [`DetailError::Store`] when the update fails; the resolver state is
    /// unchanged then.
    pub async fn save(&mut self, request: UpdateTaskRequest) -> Result<Task, DetailError> {
        let id = self.resolved_id()?;
        let updated = self.store.update(id, request).await?;
        self.state = DetailState::Found(updated.clone());
        Ok(updated)
    }

    /// Deletes the resolved task through the store.
    ///
    /// On success the selection is cleared and the caller should navigate
    /// back to the board.
    ///
    /// # Errors
    ///
    /// Returns [`DetailError::NothingResolved`] when no task is found, or
    /// [`DetailError::Store`] when the delete fails; the resolver state is
    /// unchanged then.
    pub async fn delete(&mut self) -> Result<DetailExit, DetailError> {
        let id = self.resolved_id()?;
        self.store.delete(id).await?;
        self.id = None;
        self.state = DetailState::NotFound;
        Ok(DetailExit::ReturnToBoard)
    }

    fn resolved_id(&self) -> Result<TaskId, DetailError> {
        self.state
            .task()
            .map(Task::id)
            .ok_or(DetailError::NothingResolved)
    }
}
