//! In-memory remote task store for tests and local development.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskPatch},
    ports::{RemoteStoreError, RemoteStoreResult, RemoteTaskStore},
};

/// Number of calls observed per remote operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoteCallCounts {
    /// `list` calls.
    pub list: usize,
    /// `insert` calls.
    pub insert: usize,
    /// `update_by_id` calls.
    pub update: usize,
    /// `delete_by_id` calls.
    pub delete: usize,
    /// `get_by_id` calls.
    pub get: usize,
}

impl RemoteCallCounts {
    /// Returns the number of calls across all operations.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.list + self.insert + self.update + self.delete + self.get
    }
}

/// Thread-safe in-memory task table.
///
/// Rows are kept newest first, so rows created within the same clock tick
/// still list in reverse insertion order.
#[derive(Clone)]
pub struct InMemoryRemoteTaskStore {
    state: Arc<RwLock<InMemoryRemoteState>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Debug, Default)]
struct InMemoryRemoteState {
    rows: Vec<Task>,
    calls: RemoteCallCounts,
    unavailable: bool,
}

impl InMemoryRemoteTaskStore {
    /// Creates an empty store stamping rows with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty store stamping rows with `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryRemoteState::default())),
            clock,
        }
    }

    /// Returns the calls observed so far.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::Persistence`] when the state lock is
    /// poisoned.
    pub fn call_counts(&self) -> RemoteStoreResult<RemoteCallCounts> {
        Ok(self.read()?.calls)
    }

    /// Simulates an outage: while set, every call fails with
    /// [`RemoteStoreError::Unavailable`].
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::Persistence`] when the state lock is
    /// poisoned.
    pub fn set_unavailable(&self, unavailable: bool) -> RemoteStoreResult<()> {
        self.write()?.unavailable = unavailable;
        Ok(())
    }

    /// Returns the stored rows, newest first, without counting a call.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::Persistence`] when the state lock is
    /// poisoned.
    pub fn rows(&self) -> RemoteStoreResult<Vec<Task>> {
        Ok(sorted_newest_first(&self.read()?.rows))
    }

    fn read(&self) -> RemoteStoreResult<RwLockReadGuard<'_, InMemoryRemoteState>> {
        self.state.read().map_err(|err| {
            RemoteStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> RemoteStoreResult<RwLockWriteGuard<'_, InMemoryRemoteState>> {
        self.state.write().map_err(|err| {
            RemoteStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    /// Records a call and fails it when an outage is being simulated.
    fn begin(
        &self,
        count: impl FnOnce(&mut RemoteCallCounts),
    ) -> RemoteStoreResult<RwLockWriteGuard<'_, InMemoryRemoteState>> {
        let mut state = self.write()?;
        count(&mut state.calls);
        if state.unavailable {
            return Err(RemoteStoreError::Unavailable(
                "in-memory store is offline".to_owned(),
            ));
        }
        Ok(state)
    }
}

impl Default for InMemoryRemoteTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryRemoteTaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRemoteTaskStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn sorted_newest_first(rows: &[Task]) -> Vec<Task> {
    let mut sorted = rows.to_vec();
    sorted.sort_by_key(|task| std::cmp::Reverse(task.created_at()));
    sorted
}

#[async_trait]
impl RemoteTaskStore for InMemoryRemoteTaskStore {
    async fn list(&self) -> RemoteStoreResult<Vec<Task>> {
        let state = self.begin(|calls| calls.list += 1)?;
        Ok(sorted_newest_first(&state.rows))
    }

    async fn insert(&self, task: &NewTask) -> RemoteStoreResult<Task> {
        let mut state = self.begin(|calls| calls.insert += 1)?;
        let timestamp = self.clock.utc();
        let row = Task::from_persisted(PersistedTaskData {
            id: TaskId::new(),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            created_at: timestamp,
            updated_at: timestamp,
        });
        state.rows.insert(0, row.clone());
        Ok(row)
    }

    async fn update_by_id(&self, id: TaskId, patch: &TaskPatch) -> RemoteStoreResult<Task> {
        let mut state = self.begin(|calls| calls.update += 1)?;
        let now = self.clock.utc();
        let row = state
            .rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or(RemoteStoreError::NotFound(id))?;
        *row = row.patched(patch, now);
        Ok(row.clone())
    }

    async fn delete_by_id(&self, id: TaskId) -> RemoteStoreResult<()> {
        let mut state = self.begin(|calls| calls.delete += 1)?;
        let before = state.rows.len();
        state.rows.retain(|row| row.id() != id);
        if state.rows.len() == before {
            return Err(RemoteStoreError::NotFound(id));
        }
        Ok(())
    }

    async fn get_by_id(&self, id: TaskId) -> RemoteStoreResult<Task> {
        let state = self.begin(|calls| calls.get += 1)?;
        state
            .rows
            .iter()
            .find(|row| row.id() == id)
            .cloned()
            .ok_or(RemoteStoreError::NotFound(id))
    }
}
