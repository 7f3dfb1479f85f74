//! Self-registering unit test harness
//!
//! Tests declare themselves with [`test_case!`] and are collected before
//! `main` runs. [`run_registered`] executes them one at a time in
//! declaration order, printing failure details and a summary to stdout.
//!
//! Inside a test, [`require!`] checks a predicate. The first failing check
//! records its call site and source text and ends that test; the remaining
//! tests still run.
//!
//! # Example
//!
//! ```no_run
//! use std::process::ExitCode;
//!
//! toytest::test_case!("addition", {
//!     toytest::require!(2 + 2 == 4);
//! });
//!
//! fn main() -> toytest::Result<ExitCode> {
//!     Ok(toytest::run_registered()?.exit_code())
//! }
//! ```

pub mod assertion;
pub mod case;
mod macros;
pub mod registry;
pub mod reporter;
pub mod runner;

use std::io;
use thiserror::Error;

pub use case::{Declaration, FailedAssertion, Halt, Outcome, TestBody, TestCase};
pub use registry::Registry;
pub use reporter::{ConsoleReporter, Summary};
pub use runner::TestRunner;

#[doc(hidden)]
pub use inventory;

/// Harness errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to write test report: {0}")]
    Report(#[from] io::Error),
}

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, Error>;

/// Run every registered test and report to stdout.
///
/// Styling is always emitted, regardless of whether stdout is a terminal.
pub fn run_registered() -> Result<Summary> {
    colored::control::set_override(true);

    let mut registry = Registry::collect();
    let stdout = io::stdout();
    let mut reporter = ConsoleReporter::new(stdout.lock());
    TestRunner::new().run(&mut registry, &mut reporter)
}
