//! Assertion bookkeeping for the test case currently running
//!
//! The runner activates a fresh record before invoking a body and takes it
//! back afterwards. `require` writes into whichever record is active on the
//! calling thread, so every assertion lands on the right test without being
//! handed a context explicitly.

use crate::case::{FailedAssertion, Halt, Outcome};
use std::cell::RefCell;

/// Results accumulated by the active test
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ActiveRecord {
    pub assertions_run: usize,
    pub failed_assertion: Option<FailedAssertion>,
}

impl ActiveRecord {
    fn pass(&mut self) {
        // A halted test no longer counts assertions.
        if self.failed_assertion.is_none() {
            self.assertions_run += 1;
        }
    }

    fn fail(&mut self, failure: FailedAssertion) {
        if self.failed_assertion.is_none() {
            self.failed_assertion = Some(failure);
        }
    }
}

thread_local! {
    static ACTIVE: RefCell<Option<ActiveRecord>> = const { RefCell::new(None) };
}

/// Start recording for a new test on this thread
pub(crate) fn activate() {
    ACTIVE.with(|slot| *slot.borrow_mut() = Some(ActiveRecord::default()));
}

/// Stop recording and hand back what the test produced
pub(crate) fn deactivate() -> ActiveRecord {
    ACTIVE.with(|slot| slot.borrow_mut().take().unwrap_or_default())
}

/// Check one predicate against the active test.
///
/// Called through `require!`, which supplies the source text and call site
/// and propagates the returned `Halt` out of the test body.
///
/// # Panics
///
/// Panics if no test is running on this thread.
pub fn require(passed: bool, expression: &str, file: &str, line: u32) -> Outcome {
    ACTIVE.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(record) = slot.as_mut() else {
            panic!("require!({expression}) at {file}:{line} used outside of a running test case");
        };

        if passed {
            record.pass();
            tracing::trace!(file, line, expression, "assertion passed");
            return Ok(());
        }

        tracing::debug!(file, line, expression, "assertion failed");
        record.fail(FailedAssertion::new(file, line, expression));
        Err(Halt)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::require;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_passing_assertions_are_counted() {
        activate();
        assert_eq!(require(true, "true", "a.rs", 1), Ok(()));
        assert_eq!(require(1 < 2, "1 < 2", "a.rs", 2), Ok(()));
        let record = deactivate();

        assert_eq!(record.assertions_run, 2);
        assert!(record.failed_assertion.is_none());
    }

    #[test]
    fn test_failure_is_recorded_and_halts() {
        activate();
        assert_eq!(require(true, "true", "a.rs", 1), Ok(()));
        assert_eq!(require(false, "5 == 10", "a.rs", 2), Err(Halt));
        let record = deactivate();

        assert_eq!(record.assertions_run, 1);
        assert_eq!(
            record.failed_assertion,
            Some(FailedAssertion::new("a.rs", 2, "5 == 10"))
        );
    }

    #[test]
    fn test_first_failure_wins_when_halt_is_ignored() {
        activate();
        let _ = require(false, "first", "a.rs", 10);
        let _ = require(true, "counted?", "a.rs", 11);
        let _ = require(false, "second", "a.rs", 12);
        let record = deactivate();

        assert_eq!(record.assertions_run, 0);
        assert_eq!(record.failed_assertion.unwrap().expression, "first");
    }

    #[test]
    fn test_activate_starts_fresh() {
        activate();
        let _ = require(false, "stale", "a.rs", 1);
        activate();
        let record = deactivate();
        assert_eq!(record, ActiveRecord::default());
    }

    #[test]
    fn test_deactivate_without_activate_is_empty() {
        let record = deactivate();
        assert_eq!(record, ActiveRecord::default());
    }

    #[test]
    #[should_panic(expected = "outside of a running test case")]
    fn test_require_without_active_test_panics() {
        let _ = require(true, "true", "a.rs", 1);
    }

    static REACHED_AFTER_FAILURE: AtomicUsize = AtomicUsize::new(0);

    fn halting_body() -> Outcome {
        require!(2 + 3 == 5);
        require!(5 == 10);
        REACHED_AFTER_FAILURE.fetch_add(1, Ordering::SeqCst);
        require!(true);
        Ok(())
    }

    #[test]
    fn test_require_macro_returns_early() {
        activate();
        let outcome = halting_body();
        let record = deactivate();

        assert_eq!(outcome, Err(Halt));
        assert_eq!(REACHED_AFTER_FAILURE.load(Ordering::SeqCst), 0);
        assert_eq!(record.assertions_run, 1);

        let failure = record.failed_assertion.unwrap();
        assert_eq!(failure.expression, "5 == 10");
        assert_eq!(failure.file, file!());
    }
}
