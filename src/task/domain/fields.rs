//! Validated text fields of a task and their length limits.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Character limits applied to task text before any write.
///
/// The defaults match the `VARCHAR(200)` title and `VARCHAR(500)`
/// description columns of the `tasks` table.
///
/// # Examples
///
/// ```
/// use taskboard::task::domain::TaskLimits;
///
/// let limits = TaskLimits::default();
/// assert_eq!(limits.max_title_chars, 200);
/// assert_eq!(limits.max_description_chars, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLimits {
    /// Maximum title length in characters.
    pub max_title_chars: usize,
    /// Maximum description length in characters.
    pub max_description_chars: usize,
}

impl Default for TaskLimits {
    fn default() -> Self {
        Self::new(200, 500)
    }
}

impl TaskLimits {
    /// Creates limits with explicit maxima.
    #[must_use]
    pub const fn new(max_title_chars: usize, max_description_chars: usize) -> Self {
        Self {
            max_title_chars,
            max_description_chars,
        }
    }

    /// Creates tighter limits for compact card layouts.
    #[must_use]
    pub const fn strict() -> Self {
        Self::new(80, 200)
    }
}

/// Task title, trimmed and non-empty.
///
/// Deserialization trims the value and rejects blank text. Length limits
/// are not applied, as with [`TaskTitle::from_persisted`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty after
    /// trimming, or [`TaskDomainError::TitleTooLong`] when the trimmed value
    /// exceeds `limits.max_title_chars`.
    pub fn new(value: impl AsRef<str>, limits: &TaskLimits) -> Result<Self, TaskDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let actual = trimmed.chars().count();
        if actual > limits.max_title_chars {
            return Err(TaskDomainError::TitleTooLong {
                max: limits.max_title_chars,
                actual,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Wraps a title read back from the store of record without re-checking
    /// limits.
    #[must_use]
    pub const fn from_persisted(value: String) -> Self {
        Self(value)
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl From<TaskTitle> for String {
    fn from(title: TaskTitle) -> Self {
        title.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task description, trimmed and never empty.
///
/// An empty description is represented as an absent value, never as an
/// empty string. Deserialization trims the value and rejects blank text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Creates a validated description, or `None` when the value is blank.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DescriptionTooLong`] when the trimmed value
    /// exceeds `limits.max_description_chars`.
    pub fn new(
        value: impl AsRef<str>,
        limits: &TaskLimits,
    ) -> Result<Option<Self>, TaskDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let actual = trimmed.chars().count();
        if actual > limits.max_description_chars {
            return Err(TaskDomainError::DescriptionTooLong {
                max: limits.max_description_chars,
                actual,
            });
        }
        Ok(Some(Self(trimmed.to_owned())))
    }

    /// Wraps a persisted description, mapping blank text to `None`.
    #[must_use]
    pub fn from_persisted(value: Option<String>) -> Option<Self> {
        value.filter(|text| !text.trim().is_empty()).map(Self)
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for TaskDescription {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::BlankDescription);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl From<TaskDescription> for String {
    fn from(description: TaskDescription) -> Self {
        description.0
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
