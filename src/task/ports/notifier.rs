//! Advisory outcome signals consumed by notification (toast) surfaces.

/// Store operation that produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    /// Full collection fetch.
    FetchAll,
    /// Task creation.
    Create,
    /// Task update.
    Update,
    /// Task deletion.
    Delete,
}

impl StoreOperation {
    /// Returns the stable operation name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FetchAll => "fetch_all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Result of a completed store operation, for user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The operation succeeded.
    Succeeded {
        /// Operation that completed.
        operation: StoreOperation,
        /// User-facing confirmation text.
        message: String,
    },
    /// The operation failed.
    Failed {
        /// Operation that failed.
        operation: StoreOperation,
        /// User-facing error text.
        message: String,
    },
}

impl StoreOutcome {
    /// Builds the success outcome for `operation`.
    #[must_use]
    pub fn succeeded(operation: StoreOperation) -> Self {
        let message = match operation {
            StoreOperation::FetchAll => "Tasks loaded",
            StoreOperation::Create => "Task created successfully!",
            StoreOperation::Update => "Task updated successfully!",
            StoreOperation::Delete => "Task deleted successfully!",
        };
        Self::Succeeded {
            operation,
            message: message.to_owned(),
        }
    }

    /// Builds a failure outcome carrying `message`.
    #[must_use]
    pub fn failed(operation: StoreOperation, message: impl Into<String>) -> Self {
        Self::Failed {
            operation,
            message: message.into(),
        }
    }

    /// Returns the operation this outcome belongs to.
    #[must_use]
    pub const fn operation(&self) -> StoreOperation {
        match self {
            Self::Succeeded { operation, .. } | Self::Failed { operation, .. } => *operation,
        }
    }

    /// Returns the user-facing text.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Succeeded { message, .. } | Self::Failed { message, .. } => message,
        }
    }

    /// Returns `true` for success outcomes.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

/// Sink for store outcomes.
///
/// Notifications are advisory: the store's return values stay the source of
/// truth for callers.
pub trait OutcomeNotifier: Send + Sync {
    /// Publishes one outcome.
    fn notify(&self, outcome: &StoreOutcome);
}
