//! Console reporter - failure details and the closing summary

use crate::case::TestCase;
use colored::*;
use std::io::{self, Write};
use std::process::ExitCode;

// Terminal-width rule.
const SEPARATOR_WIDTH: usize = 79;

/// Aggregate counts over a finished run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub test_cases: usize,
    pub passed: usize,
    pub failed: usize,
    /// Assertions that passed, summed over every test
    pub assertions: usize,
}

impl Summary {
    pub fn from_cases<'a>(cases: impl IntoIterator<Item = &'a TestCase>) -> Self {
        let mut summary = Summary::default();
        for case in cases {
            summary.test_cases += 1;
            if case.is_fail() {
                summary.failed += 1;
            }
            summary.assertions += case.assertions_run;
        }
        summary.passed = summary.test_cases - summary.failed;
        summary
    }

    /// Assertions reported as passed.
    ///
    /// Each failed test accounts for exactly one failed assertion.
    pub fn assertions_passed(&self) -> usize {
        self.assertions.saturating_sub(self.failed)
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status for this run
    pub fn exit_code(&self) -> ExitCode {
        if self.all_passed() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Writes test results to a console stream
pub struct ConsoleReporter<W: Write> {
    out: W,
    no_color: bool,
}

impl<W: Write> ConsoleReporter<W> {
    /// Create a reporter writing styled output to `out`
    pub fn new(out: W) -> Self {
        Self {
            out,
            no_color: false,
        }
    }

    /// Disable colored output
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Give back the underlying stream
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write the detail block for one finished test. Passing tests print nothing.
    pub fn write_test_case_result(&mut self, case: &TestCase) -> io::Result<()> {
        let Some(failure) = &case.failed_assertion else {
            return Ok(());
        };

        self.write_separator('-')?;
        writeln!(self.out, "{}", case.name)?;
        self.write_separator('-')?;
        writeln!(self.out, "{}:{}", case.file, case.line)?;
        self.write_separator('.')?;

        let failed = self.paint("FAILED:".bright_red().bold());
        writeln!(self.out, "{}:{}: {}", failure.file, failure.line, failed)?;
        let expression = self.paint(format!("REQUIRE({})", failure.expression).as_str().cyan());
        writeln!(self.out, "\t{}", expression)?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Write the closing summary over every test and return the counts
    pub fn write_summary<'a>(
        &mut self,
        cases: impl IntoIterator<Item = &'a TestCase>,
    ) -> io::Result<Summary> {
        let summary = Summary::from_cases(cases);

        if summary.all_passed() {
            writeln!(self.out, "All tests passed")?;
            writeln!(self.out)?;
        }

        self.write_separator('=')?;
        writeln!(
            self.out,
            "test cases: {} | {} passed | {} failed",
            summary.test_cases, summary.passed, summary.failed
        )?;
        writeln!(
            self.out,
            "assertions: {} | {} passed | {} failed",
            summary.assertions,
            summary.assertions_passed(),
            summary.failed
        )?;
        self.out.flush()?;
        Ok(summary)
    }

    fn write_separator(&mut self, ch: char) -> io::Result<()> {
        let rule: String = std::iter::repeat(ch).take(SEPARATOR_WIDTH).collect();
        writeln!(self.out, "{}", rule)
    }

    fn paint(&self, styled: ColoredString) -> ColoredString {
        if self.no_color {
            styled.clear()
        } else {
            styled
        }
    }
}
