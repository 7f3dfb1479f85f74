//! Test runner - execute registered tests one at a time

use crate::assertion;
use crate::case::{Halt, TestCase};
use crate::registry::Registry;
use crate::reporter::{ConsoleReporter, Summary};
use std::io::Write;

/// Sequential test runner
#[derive(Debug, Default)]
pub struct TestRunner;

impl TestRunner {
    /// Create a new test runner
    pub fn new() -> Self {
        Self
    }

    /// Run every test in registry order, reporting each as it finishes,
    /// then write the summary.
    pub fn run<W: Write>(
        &self,
        registry: &mut Registry,
        reporter: &mut ConsoleReporter<W>,
    ) -> crate::Result<Summary> {
        for case in registry.iter_mut() {
            self.run_single_test(case);
            reporter.write_test_case_result(case)?;
        }

        let summary = reporter.write_summary(registry.iter())?;
        tracing::debug!(
            test_cases = summary.test_cases,
            failed = summary.failed,
            assertions = summary.assertions,
            "test run finished"
        );
        Ok(summary)
    }

    /// Run a single test, leaving its results on the case
    pub fn run_single_test(&self, case: &mut TestCase) {
        tracing::debug!(name = %case.name, file = %case.file, line = case.line, "running test case");

        case.reset();
        assertion::activate();
        // A halted body is a normal completion; the active record holds the outcome.
        if let Err(Halt) = (case.body())() {
            tracing::trace!(name = %case.name, "test case halted");
        }
        let record = assertion::deactivate();

        case.assertions_run = record.assertions_run;
        case.failed_assertion = record.failed_assertion;
    }
}
