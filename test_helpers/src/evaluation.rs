//! Side channel recording which steps of a computation actually ran.
//!
//! Short-circuit tests need to prove that later steps were never evaluated.
//! An [`EvaluationLog`] is cheap to clone and shared between the test and
//! the code under test; every clone appends to the same ordered record.
//!
//! # Examples
//!
//! ```
//! use outcome_algebra_test_helpers::evaluation::EvaluationLog;
//!
//! let log = EvaluationLog::default();
//! let first = log.track("first", 1);
//! assert_eq!(first, 1);
//! assert_eq!(log.labels(), vec!["first".to_owned()]);
//! assert!(log.ensure_not_evaluated("second").is_ok());
//! ```

use std::sync::Arc;

use anyhow::{Result, ensure};
use parking_lot::Mutex;

/// Ordered, thread-safe record of evaluated step labels.
#[derive(Debug, Clone, Default)]
pub struct EvaluationLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl EvaluationLog {
    /// Record that the step called `label` ran.
    pub fn record(&self, label: impl Into<String>) {
        self.entries.lock().push(label.into());
    }

    /// Record `label` and hand `value` straight back.
    pub fn track<T>(&self, label: impl Into<String>, value: T) -> T {
        self.record(label);
        value
    }

    /// Labels recorded so far, in evaluation order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Number of recorded evaluations.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns `true` when `label` was recorded at least once.
    #[must_use]
    pub fn was_evaluated(&self, label: &str) -> bool {
        self.entries.lock().iter().any(|entry| entry == label)
    }

    /// Fail when `label` was recorded.
    ///
    /// # Errors
    ///
    /// Returns an error naming the step and the full evaluation order when
    /// the step ran.
    pub fn ensure_not_evaluated(&self, label: &str) -> Result<()> {
        ensure!(
            !self.was_evaluated(label),
            "step '{label}' should not have been evaluated; order was {:?}",
            self.labels()
        );
        Ok(())
    }
}
