//! Test result types.

use std::time::Duration;

use urit_registry::Identity;

/// Outcome of a single vector, as the runner reports it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TestOutcome {
    /// The expansion or extraction matched.
    Passed,
    /// The expansion produced the wrong string, or extraction lost variables.
    Failed(String),
    /// The implementation returned an error or panicked.
    Errored(String),
    /// Not run, with the reason.
    Skipped(String),
}

impl TestOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, TestOutcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TestOutcome::Failed(_))
    }

    pub fn is_errored(&self) -> bool {
        matches!(self, TestOutcome::Errored(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, TestOutcome::Skipped(_))
    }
}

/// Result of running a single vector.
#[derive(Clone, Debug)]
pub struct TestResult {
    /// Identity the vector is registered under.
    pub identity: Identity,
    /// Description of the vector, for reports.
    pub description: String,
    pub outcome: TestOutcome,
    /// Time taken by the check.
    pub duration: Duration,
}

impl TestResult {
    pub fn passed(identity: Identity, description: String, duration: Duration) -> Self {
        TestResult {
            identity,
            description,
            outcome: TestOutcome::Passed,
            duration,
        }
    }

    #[cold]
    pub fn failed(identity: Identity, description: String, message: String, duration: Duration) -> Self {
        TestResult {
            identity,
            description,
            outcome: TestOutcome::Failed(message),
            duration,
        }
    }

    #[cold]
    pub fn errored(identity: Identity, description: String, cause: String, duration: Duration) -> Self {
        TestResult {
            identity,
            description,
            outcome: TestOutcome::Errored(cause),
            duration,
        }
    }

    #[cold]
    pub fn skipped(identity: Identity, description: String, reason: String) -> Self {
        TestResult {
            identity,
            description,
            outcome: TestOutcome::Skipped(reason),
            duration: Duration::ZERO,
        }
    }
}

/// Summary of one suite run.
#[derive(Clone, Debug, Default)]
pub struct TestSummary {
    /// Individual results, in registry order.
    pub results: Vec<TestResult>,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    pub skipped: usize,
    /// Wall-clock time for the whole run.
    pub duration: Duration,
}

impl TestSummary {
    pub fn new() -> Self {
        TestSummary::default()
    }

    pub fn add_result(&mut self, result: TestResult) {
        match &result.outcome {
            TestOutcome::Passed => self.passed += 1,
            TestOutcome::Failed(_) => self.failed += 1,
            TestOutcome::Errored(_) => self.errored += 1,
            TestOutcome::Skipped(_) => self.skipped += 1,
        }
        self.results.push(result);
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errored + self.skipped
    }

    /// Returns true if any vector failed or errored.
    pub fn has_failures(&self) -> bool {
        self.failed > 0 || self.errored > 0
    }

    /// Get exit code: 0 = all pass, 1 = failures or errors, 2 = no tests selected.
    pub fn exit_code(&self) -> i32 {
        if self.total() == 0 {
            2
        } else {
            i32::from(self.has_failures())
        }
    }

    /// Results that failed or errored.
    pub fn failures(&self) -> impl Iterator<Item = &TestResult> + '_ {
        self.results
            .iter()
            .filter(|r| r.outcome.is_failed() || r.outcome.is_errored())
    }
}

#[cfg(test)]
mod tests;
