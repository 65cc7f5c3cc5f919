//! Task store: the single owner of the in-memory task collection.
//!
//! Every mutation waits for the remote store's authoritative row and then
//! publishes a new [`TaskSnapshot`]. Readers only ever see whole snapshots,
//! so a partially applied write is never observable.

use crate::task::{
    domain::{
        NewTask, Task, TaskDescription, TaskDomainError, TaskId, TaskLimits, TaskPatch,
        TaskStatus, TaskTitle,
    },
    ports::{OutcomeNotifier, RemoteStoreError, RemoteTaskStore, StoreOperation, StoreOutcome},
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: Option<TaskStatus>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status; [`TaskStatus::Todo`] when omitted.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Validates the request into an insert payload.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the title is blank or a field
    /// exceeds `limits`.
    pub fn validate(&self, limits: &TaskLimits) -> Result<NewTask, TaskDomainError> {
        let title = TaskTitle::new(&self.title, limits)?;
        let description = match &self.description {
            Some(raw) => TaskDescription::new(raw, limits)?,
            None => None,
        };
        Ok(NewTask {
            title,
            description,
            status: self.status.unwrap_or_default(),
        })
    }
}

/// Request payload for a partial task update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
}

impl UpdateTaskRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a request that only moves the task to `status`.
    #[must_use]
    pub const fn status(status: TaskStatus) -> Self {
        Self {
            title: None,
            description: None,
            status: Some(status),
        }
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description; blank text clears it.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Validates the present fields into a patch.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when a present title is blank or a
    /// present field exceeds `limits`.
    pub fn validate(&self, limits: &TaskLimits) -> Result<TaskPatch, TaskDomainError> {
        let title = self
            .title
            .as_ref()
            .map(|raw| TaskTitle::new(raw, limits))
            .transpose()?;
        let description = self
            .description
            .as_ref()
            .map(|raw| TaskDescription::new(raw, limits))
            .transpose()?;
        Ok(TaskPatch {
            title,
            description,
            status: self.status,
        })
    }
}

/// Immutable view of the store's state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSnapshot {
    tasks: Vec<Task>,
    loading: bool,
    error: Option<String>,
}

impl TaskSnapshot {
    /// Snapshot published before the first fetch completes.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            tasks: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Returns the collection, most recently created first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns `true` while a full fetch is in flight.
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// Returns the most recent error message, if the last operation failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns `true` when the collection holds a task with `id`.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.find(id).is_some()
    }
}

impl Default for TaskSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}

/// Errors returned by task store operations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// Input was rejected before any remote call.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The remote store failed.
    #[error(transparent)]
    Remote(RemoteStoreError),

    /// No task has the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

impl From<RemoteStoreError> for TaskStoreError {
    fn from(err: RemoteStoreError) -> Self {
        match err {
            RemoteStoreError::NotFound(id) => Self::NotFound(id),
            other => Self::Remote(other),
        }
    }
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Mediator between the board views and the remote task table.
///
/// Construct one instance at startup and share it through [`Arc`] with the
/// [`BoardReconciler`](super::BoardReconciler),
/// [`DetailResolver`](super::DetailResolver), and any view that issues
/// mutations.
pub struct TaskStore<R, N>
where
    R: RemoteTaskStore,
    N: OutcomeNotifier,
{
    remote: Arc<R>,
    notifier: Arc<N>,
    limits: TaskLimits,
    snapshot: watch::Sender<Arc<TaskSnapshot>>,
}

impl<R, N> TaskStore<R, N>
where
    R: RemoteTaskStore,
    N: OutcomeNotifier,
{
    /// Creates a store with default text limits.
    #[must_use]
    pub fn new(remote: Arc<R>, notifier: Arc<N>) -> Self {
        let (snapshot, _) = watch::channel(Arc::new(TaskSnapshot::initial()));
        Self {
            remote,
            notifier,
            limits: TaskLimits::default(),
            snapshot,
        }
    }

    /// Replaces the text limits applied before writes.
    #[must_use]
    pub const fn with_limits(mut self, limits: TaskLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the text limits applied before writes.
    #[must_use]
    pub const fn limits(&self) -> &TaskLimits {
        &self.limits
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<TaskSnapshot> {
        Arc::clone(&*self.snapshot.borrow())
    }

    /// Subscribes to every snapshot published from now on.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<TaskSnapshot>> {
        self.snapshot.subscribe()
    }

    /// Replaces the collection with the remote table, newest first.
    ///
    /// On failure the previous collection is kept and the error message is
    /// recorded. Safe to re-issue at any time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Remote`] when the listing fails.
    pub async fn fetch_all(&self) -> TaskStoreResult<()> {
        self.publish(|snapshot| {
            let changed = !snapshot.loading || snapshot.error.is_some();
            snapshot.loading = true;
            snapshot.error = None;
            changed
        });
        tracing::debug!("listing tasks from remote store");
        let result = match self.remote.list().await {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "replacing task collection");
                self.publish(move |snapshot| {
                    snapshot.tasks = tasks;
                    snapshot.loading = false;
                    true
                });
                Ok(())
            }
            Err(err) => Err(err.into()),
        };
        self.settle(StoreOperation::FetchAll, result)
    }

    /// Reads one task straight from the remote store.
    ///
    /// Any previously recorded error is cleared first. The in-memory
    /// collection is left untouched and a failed lookup records no error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist, or
    /// [`TaskStoreError::Remote`] when the lookup fails.
    pub async fn fetch_one(&self, id: TaskId) -> TaskStoreResult<Task> {
        self.clear_error();
        tracing::debug!(task_id = %id, "fetching task from remote store");
        self.remote.get_by_id(id).await.map_err(|err| {
            tracing::warn!(task_id = %id, error = %err, "error fetching task");
            TaskStoreError::from(err)
        })
    }

    /// Creates a task and places it at the head of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] without contacting the remote
    /// store when the request is invalid, or [`TaskStoreError::Remote`] when
    /// the insert fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskStoreResult<Task> {
        self.clear_error();
        let result = self.try_create(&request).await;
        self.settle(StoreOperation::Create, result)
    }

    /// Writes the present fields of `request` and replaces the local entry
    /// with the returned row.
    ///
    /// When no local entry has `id` the remote update still runs and local
    /// state is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] without contacting the remote
    /// store when the request is invalid, [`TaskStoreError::NotFound`] when
    /// the remote row does not exist, or [`TaskStoreError::Remote`] when the
    /// update fails.
    pub async fn update(&self, id: TaskId, request: UpdateTaskRequest) -> TaskStoreResult<Task> {
        self.clear_error();
        let result = self.try_update(id, &request).await;
        self.settle(StoreOperation::Update, result)
    }

    /// Deletes a task and removes it from the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the remote row does not
    /// exist, or [`TaskStoreError::Remote`] when the delete fails.
    pub async fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        self.clear_error();
        let result = self.try_delete(id).await;
        self.settle(StoreOperation::Delete, result)
    }

    async fn try_create(&self, request: &CreateTaskRequest) -> TaskStoreResult<Task> {
        let new_task = request.validate(&self.limits)?;
        tracing::debug!(status = %new_task.status, "inserting task");
        let task = self.remote.insert(&new_task).await?;
        let inserted = task.clone();
        self.publish(move |snapshot| {
            snapshot.tasks.retain(|existing| existing.id() != inserted.id());
            snapshot.tasks.insert(0, inserted);
            true
        });
        Ok(task)
    }

    async fn try_update(
        &self,
        id: TaskId,
        request: &UpdateTaskRequest,
    ) -> TaskStoreResult<Task> {
        let patch = request.validate(&self.limits)?;
        tracing::debug!(task_id = %id, "updating task");
        let task = self.remote.update_by_id(id, &patch).await?;
        let replacement = task.clone();
        self.publish(move |snapshot| {
            let Some(slot) = snapshot.tasks.iter_mut().find(|existing| existing.id() == id)
            else {
                return false;
            };
            *slot = replacement;
            true
        });
        Ok(task)
    }

    async fn try_delete(&self, id: TaskId) -> TaskStoreResult<()> {
        tracing::debug!(task_id = %id, "deleting task");
        self.remote.delete_by_id(id).await?;
        self.publish(|snapshot| {
            let before = snapshot.tasks.len();
            snapshot.tasks.retain(|existing| existing.id() != id);
            snapshot.tasks.len() != before
        });
        Ok(())
    }

    /// Records the outcome of `operation` and passes `result` through.
    fn settle<T>(
        &self,
        operation: StoreOperation,
        result: TaskStoreResult<T>,
    ) -> TaskStoreResult<T> {
        match &result {
            Ok(_) => self.notifier.notify(&StoreOutcome::succeeded(operation)),
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(
                    operation = operation.as_str(),
                    error = %err,
                    "task store operation failed"
                );
                let recorded = message.clone();
                self.publish(move |snapshot| {
                    snapshot.error = Some(recorded);
                    if operation == StoreOperation::FetchAll {
                        snapshot.loading = false;
                    }
                    true
                });
                self.notifier.notify(&StoreOutcome::failed(operation, message));
            }
        }
        result
    }

    fn clear_error(&self) {
        self.publish(|snapshot| snapshot.error.take().is_some());
    }

    /// Applies `update` to the current snapshot; subscribers are notified
    /// only when it reports a change.
    fn publish(&self, update: impl FnOnce(&mut TaskSnapshot) -> bool) {
        self.snapshot
            .send_if_modified(|current| update(Arc::make_mut(current)));
    }
}
