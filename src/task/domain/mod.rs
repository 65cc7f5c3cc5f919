//! Domain model for board tasks.
//!
//! Tasks are rows owned by the remote store of record. The domain types
//! validate text fields before any write and keep all infrastructure
//! concerns outside of the domain boundary.

mod error;
mod fields;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use fields::{TaskDescription, TaskLimits, TaskTitle};
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task, TaskPatch};
