//! Test registry - the ordered set of declared test cases

use crate::case::{Declaration, TestCase};

/// Every declared test case, in run order
#[derive(Debug, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from every `test_case!` linked into the program
    pub fn collect() -> Self {
        let mut registry = Registry::new();
        for decl in inventory::iter::<Declaration> {
            registry.push(decl);
        }

        // Link order is unspecified; sort by file, then line, for a
        // deterministic run order. The sort is stable for equal sites.
        registry
            .cases
            .sort_by(|a, b| a.file.cmp(&b.file).then_with(|| a.line.cmp(&b.line)));

        tracing::debug!(test_cases = registry.len(), "collected test cases");
        registry
    }

    /// Append one declared test
    pub fn push(&mut self, decl: &Declaration) {
        self.cases.push(TestCase::from(decl));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestCase> {
        self.cases.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, TestCase> {
        self.cases.iter_mut()
    }

    /// Check if no tests were declared
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Get count of tests
    pub fn len(&self) -> usize {
        self.cases.len()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a TestCase;
    type IntoIter = std::slice::Iter<'a, TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
