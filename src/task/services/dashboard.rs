//! Dashboard statistics derived from a snapshot.

use super::store::TaskSnapshot;
use crate::task::domain::{Task, TaskStatus};

/// Per-status task counts and completion progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// Number of tasks on the board.
    pub total: usize,
    /// Tasks in the `TODO` column.
    pub todo: usize,
    /// Tasks in the `DOING` column.
    pub doing: usize,
    /// Tasks in the `DONE` column.
    pub done: usize,
}

impl DashboardStats {
    /// Counts `tasks` by status.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            match task.status() {
                TaskStatus::Todo => stats.todo += 1,
                TaskStatus::Doing => stats.doing += 1,
                TaskStatus::Done => stats.done += 1,
            }
            stats
        })
    }

    /// Counts the collection held by `snapshot`.
    #[must_use]
    pub fn from_snapshot(snapshot: &TaskSnapshot) -> Self {
        Self::from_tasks(snapshot.tasks())
    }

    /// Returns the count for `status`.
    #[must_use]
    pub const fn count(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Todo => self.todo,
            TaskStatus::Doing => self.doing,
            TaskStatus::Done => self.done,
        }
    }

    /// Returns the share of done tasks as a whole percentage, rounded half
    /// up; `0` for an empty board.
    #[must_use]
    pub fn completion_rate(&self) -> usize {
        // round(done * 100 / total) == floor((200 * done + total) / (2 * total))
        (self.done * 200 + self.total)
            .checked_div(self.total * 2)
            .unwrap_or(0)
    }

    /// Returns `true` when the board has no tasks yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}
