//! Outcome notifier that keeps every outcome for later inspection.

use std::sync::{Arc, Mutex, PoisonError};

use crate::task::ports::{OutcomeNotifier, StoreOutcome};

/// Thread-safe recorder of store outcomes.
///
/// A poisoned lock is recovered so no outcome is lost.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    outcomes: Arc<Mutex<Vec<StoreOutcome>>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the outcomes recorded so far, oldest first.
    #[must_use]
    pub fn outcomes(&self) -> Vec<StoreOutcome> {
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent outcome, if any.
    #[must_use]
    pub fn last(&self) -> Option<StoreOutcome> {
        self.outcomes().pop()
    }
}

impl OutcomeNotifier for RecordingNotifier {
    fn notify(&self, outcome: &StoreOutcome) {
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(outcome.clone());
    }
}
