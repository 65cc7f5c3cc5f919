//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing task field values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The trimmed title exceeds the configured character limit.
    #[error("task title is {actual} characters, maximum is {max}")]
    TitleTooLong {
        /// Configured maximum length in characters.
        max: usize,
        /// Length of the rejected title in characters.
        actual: usize,
    },

    /// A serialized description is empty after trimming.
    #[error("task description must not be blank")]
    BlankDescription,

    /// The trimmed description exceeds the configured character limit.
    #[error("task description is {actual} characters, maximum is {max}")]
    DescriptionTooLong {
        /// Configured maximum length in characters.
        max: usize,
        /// Length of the rejected description in characters.
        actual: usize,
    },
}

/// Error returned while parsing a task status from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
