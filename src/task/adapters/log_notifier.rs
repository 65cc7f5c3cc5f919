//! Outcome notifier that writes outcomes to the `tracing` log.

use crate::task::ports::{OutcomeNotifier, StoreOutcome};

/// Logs successes at `info` and failures at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl OutcomeNotifier for TracingNotifier {
    fn notify(&self, outcome: &StoreOutcome) {
        let operation = outcome.operation().as_str();
        if outcome.is_success() {
            tracing::info!(operation, notice = outcome.message(), "task store outcome");
        } else {
            tracing::warn!(operation, notice = outcome.message(), "task store outcome");
        }
    }
}
