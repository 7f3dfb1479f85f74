//! Test case records - what a declared test is and what running it produced

use thiserror::Error;

/// Signal returned by a test body that stopped at a failed assertion.
///
/// This is not an error: the failure itself has already been recorded in
/// the active test slot. The runner treats `Err(Halt)` exactly like
/// `Ok(())`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halt;

/// What a test body returns.
pub type Outcome = Result<(), Halt>;

/// A test body: takes nothing, reports through `require!`.
pub type TestBody = fn() -> Outcome;

/// The assertion that stopped a test
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{file}:{line}: FAILED: REQUIRE({expression})")]
pub struct FailedAssertion {
    /// Source file of the `require!` call
    pub file: String,
    /// Line of the `require!` call
    pub line: u32,
    /// Literal source text of the predicate
    pub expression: String,
}

impl FailedAssertion {
    pub fn new(file: &str, line: u32, expression: &str) -> Self {
        Self {
            file: file.to_string(),
            line,
            expression: expression.to_string(),
        }
    }
}

/// Static registration record submitted by `test_case!`.
///
/// Built in const context so it can live in the link-time collection.
#[derive(Debug, Clone, Copy)]
pub struct Declaration {
    pub name: &'static str,
    pub file: &'static str,
    pub line: u32,
    pub body: TestBody,
}

impl Declaration {
    pub const fn new(name: &'static str, file: &'static str, line: u32, body: TestBody) -> Self {
        Self {
            name,
            file,
            line,
            body,
        }
    }
}

inventory::collect!(Declaration);

/// A single declared test together with the results of its last run
#[derive(Debug, Clone)]
pub struct TestCase {
    /// Display name given at declaration (not required to be unique)
    pub name: String,
    /// File containing the declaration
    pub file: String,
    /// Line of the declaration
    pub line: u32,
    body: TestBody,
    /// Assertions that passed during the last run
    pub assertions_run: usize,
    // Only one failure is kept since the body halts on the first.
    pub failed_assertion: Option<FailedAssertion>,
}

impl TestCase {
    pub fn new(name: impl Into<String>, file: impl Into<String>, line: u32, body: TestBody) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            line,
            body,
            assertions_run: 0,
            failed_assertion: None,
        }
    }

    /// The body to invoke when this case is active
    pub fn body(&self) -> TestBody {
        self.body
    }

    /// Check if the last run passed
    pub fn is_pass(&self) -> bool {
        self.failed_assertion.is_none()
    }

    /// Check if the last run stopped on a failed assertion
    pub fn is_fail(&self) -> bool {
        self.failed_assertion.is_some()
    }

    /// Forget the results of any previous run
    pub(crate) fn reset(&mut self) {
        self.assertions_run = 0;
        self.failed_assertion = None;
    }
}

impl From<&Declaration> for TestCase {
    fn from(decl: &Declaration) -> Self {
        TestCase::new(decl.name, decl.file, decl.line, decl.body)
    }
}
