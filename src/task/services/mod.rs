//! Application services for the task board.
//!
//! [`TaskStore`] owns the collection; [`BoardReconciler`],
//! [`DetailResolver`] and [`DashboardStats`] derive their views from its
//! snapshots.

mod board;
mod dashboard;
mod detail;
mod store;

pub use board::{
    BoardColumns, BoardReconciler, BoardView, DragEvent, DragResolution, DragState,
    StatusChange, status_change,
};
pub use dashboard::DashboardStats;
pub use detail::{DetailError, DetailExit, DetailResolver, DetailState, resolve_local};
pub use store::{
    CreateTaskRequest, TaskSnapshot, TaskStore, TaskStoreError, TaskStoreResult,
    UpdateTaskRequest,
};
