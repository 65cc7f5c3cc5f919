//! Board reconciler: status columns and drag-and-drop transitions.
//!
//! Column partitioning and the drag state machine are pure functions over a
//! [`TaskSnapshot`]; [`BoardReconciler`] is the thin effectful layer that
//! turns a resolved drop into one store update.

use super::store::{TaskSnapshot, TaskStore, TaskStoreResult, UpdateTaskRequest};
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{OutcomeNotifier, RemoteTaskStore},
};
use std::sync::Arc;

/// Tasks partitioned by status, each column in collection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardColumns {
    todo: Vec<Task>,
    doing: Vec<Task>,
    done: Vec<Task>,
}

impl BoardColumns {
    /// Partitions `tasks` into the three status columns.
    #[must_use]
    pub fn partition(tasks: &[Task]) -> Self {
        let mut columns = Self::default();
        for task in tasks {
            columns.column_mut(task.status()).push(task.clone());
        }
        columns
    }

    /// Partitions the collection held by `snapshot`.
    #[must_use]
    pub fn from_snapshot(snapshot: &TaskSnapshot) -> Self {
        Self::partition(snapshot.tasks())
    }

    /// Returns the tasks in the `status` column.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::Doing => &self.doing,
            TaskStatus::Done => &self.done,
        }
    }

    /// Returns the column holding `id`, if any.
    #[must_use]
    pub fn status_of(&self, id: TaskId) -> Option<TaskStatus> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| self.column(*status).iter().any(|task| task.id() == id))
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::Doing => &mut self.doing,
            TaskStatus::Done => &mut self.done,
        }
    }
}

/// Everything the board surface renders for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Status columns.
    pub columns: BoardColumns,
    /// `true` while a full fetch is in flight.
    pub loading: bool,
    /// Board-level error text from the most recent failed operation.
    pub error: Option<String>,
}

impl BoardView {
    /// Derives the board view from `snapshot`.
    #[must_use]
    pub fn from_snapshot(snapshot: &TaskSnapshot) -> Self {
        Self {
            columns: BoardColumns::from_snapshot(snapshot),
            loading: snapshot.loading(),
            error: snapshot.error().map(str::to_owned),
        }
    }
}

/// Discrete events emitted by the drag gesture layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// A task card was picked up.
    Started {
        /// Card being dragged.
        task_id: TaskId,
    },
    /// The card was released, over a drop zone identifier or over nothing.
    Ended {
        /// Identifier of the drop zone under the pointer.
        over: Option<String>,
    },
    /// The drag was abandoned.
    Cancelled,
}

/// Status change requested by a completed drag or a status button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    /// Task to move.
    pub task_id: TaskId,
    /// Current column.
    pub from: TaskStatus,
    /// Target column.
    pub to: TaskStatus,
}

/// What a drag event resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragResolution {
    /// Nothing to do.
    Ignored,
    /// A drag began on the task.
    Picked(TaskId),
    /// The drag ended without a drop target.
    Abandoned,
    /// The drop zone identifier is not a status column.
    RejectedTarget(String),
    /// The dragged task is no longer in the collection.
    MissingTask(TaskId),
    /// The task was dropped on the column it is already in.
    Unchanged(TaskId),
    /// The task must move to another column.
    Move(StatusChange),
}

/// Drag-and-drop state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A task card is being dragged.
    Dragging(TaskId),
}

impl DragState {
    /// Applies `event` against the current collection.
    ///
    /// Returns the next state and the resolution; at most one resolution per
    /// event is a [`DragResolution::Move`].
    #[must_use]
    pub fn apply(self, event: DragEvent, tasks: &[Task]) -> (Self, DragResolution) {
        match (self, event) {
            (_, DragEvent::Started { task_id }) => {
                (Self::Dragging(task_id), DragResolution::Picked(task_id))
            }
            (Self::Idle, DragEvent::Ended { .. } | DragEvent::Cancelled) => {
                (Self::Idle, DragResolution::Ignored)
            }
            (Self::Dragging(_), DragEvent::Cancelled | DragEvent::Ended { over: None }) => {
                (Self::Idle, DragResolution::Abandoned)
            }
            (Self::Dragging(task_id), DragEvent::Ended { over: Some(target) }) => {
                (Self::Idle, resolve_drop(task_id, &target, tasks))
            }
        }
    }

    /// Returns the dragged task, if any.
    #[must_use]
    pub const fn dragged(self) -> Option<TaskId> {
        match self {
            Self::Idle => None,
            Self::Dragging(task_id) => Some(task_id),
        }
    }
}

fn resolve_drop(task_id: TaskId, target: &str, tasks: &[Task]) -> DragResolution {
    let Some(to) = TaskStatus::from_identifier(target) else {
        return DragResolution::RejectedTarget(target.to_owned());
    };
    let Some(task) = tasks.iter().find(|task| task.id() == task_id) else {
        return DragResolution::MissingTask(task_id);
    };
    status_change(task, to).map_or(DragResolution::Unchanged(task_id), DragResolution::Move)
}

/// Returns the change moving `task` to `to`, or `None` when it is already
/// there.
#[must_use]
pub fn status_change(task: &Task, to: TaskStatus) -> Option<StatusChange> {
    (task.status() != to).then_some(StatusChange {
        task_id: task.id(),
        from: task.status(),
        to,
    })
}

/// Board-side driver of the drag state machine.
pub struct BoardReconciler<R, N>
where
    R: RemoteTaskStore,
    N: OutcomeNotifier,
{
    store: Arc<TaskStore<R, N>>,
    drag: DragState,
}

impl<R, N> BoardReconciler<R, N>
where
    R: RemoteTaskStore,
    N: OutcomeNotifier,
{
    /// Creates an idle reconciler over `store`.
    #[must_use]
    pub const fn new(store: Arc<TaskStore<R, N>>) -> Self {
        Self {
            store,
            drag: DragState::Idle,
        }
    }

    /// Returns the drag state.
    #[must_use]
    pub const fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Derives the board view from the store's current snapshot.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::from_snapshot(&self.store.snapshot())
    }

    /// Feeds one drag event through the state machine.
    ///
    /// A [`DragResolution::Move`] issues exactly one store update; every
    /// other resolution issues none.
    ///
    /// # Errors
    ///
    /// Returns the store error when the status update fails. The drag state
    /// is already back to idle in that case.
    pub async fn handle(&mut self, event: DragEvent) -> TaskStoreResult<DragResolution> {
        let snapshot = self.store.snapshot();
        let (next, resolution) = self.drag.apply(event, snapshot.tasks());
        self.drag = next;
        match &resolution {
            DragResolution::Move(change) => {
                tracing::debug!(
                    task_id = %change.task_id,
                    from = %change.from,
                    to = %change.to,
                    "moving task to another column"
                );
                self.store
                    .update(change.task_id, UpdateTaskRequest::status(change.to))
                    .await?;
            }
            DragResolution::RejectedTarget(target) => {
                tracing::debug!(drop_zone = %target, "ignoring drop on unknown target");
            }
            _ => {}
        }
        Ok(resolution)
    }

    /// Moves a task through a card's status buttons.
    ///
    /// Returns `Ok(None)` without calling the store when the task is already
    /// in `to` or is not on the board.
    ///
    /// # Errors
    ///
    /// Returns the store error when the status update fails.
    pub async fn change_status(
        &self,
        id: TaskId,
        to: TaskStatus,
    ) -> TaskStoreResult<Option<Task>> {
        let snapshot = self.store.snapshot();
        let Some(change) = snapshot.find(id).and_then(|task| status_change(task, to)) else {
            return Ok(None);
        };
        let updated = self
            .store
            .update(change.task_id, UpdateTaskRequest::status(change.to))
            .await?;
        Ok(Some(updated))
    }
}
