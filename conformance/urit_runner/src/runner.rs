//! Test execution engine.
//!
//! Runs every selected vector of a registry against the implementation
//! under test and collects the results in registry order.

use std::time::Instant;

use rayon::prelude::*;
use urit_registry::{
    validate, validate_extraction, Check, Expander, Extractor, Identity, Outcome, Registry,
    TestSpecification,
};

use crate::config::TestRunnerConfig;
use crate::result::{TestResult, TestSummary};

/// The implementation under test for one run.
#[derive(Clone, Copy)]
struct Subject<'a> {
    expander: &'a dyn Expander,
    extractor: Option<&'a dyn Extractor>,
}

/// Test runner.
///
/// Holds only configuration; the registry and the implementation under test
/// are borrowed per run, so one runner can drive several implementations
/// over the same suite.
#[derive(Clone, Debug, Default)]
pub struct TestRunner {
    config: TestRunnerConfig,
}

impl TestRunner {
    /// Create a new test runner with default config.
    pub fn new() -> Self {
        TestRunner::default()
    }

    /// Create a test runner with custom config.
    pub fn with_config(config: TestRunnerConfig) -> Self {
        TestRunner { config }
    }

    pub fn config(&self) -> &TestRunnerConfig {
        &self.config
    }

    /// Run every expansion vector that passes the filter.
    ///
    /// Extraction vectors are reported as skipped. A vector whose expansion
    /// fails, errors or panics is recorded and the run continues with the
    /// next one.
    pub fn run<E>(&self, registry: &Registry, expander: &E) -> TestSummary
    where
        E: Expander,
    {
        self.execute(
            registry,
            Subject {
                expander,
                extractor: None,
            },
        )
    }

    /// Run every vector that passes the filter, extraction vectors through
    /// `extractor`.
    pub fn run_with_extractor<E, X>(&self, registry: &Registry, expander: &E, extractor: &X) -> TestSummary
    where
        E: Expander,
        X: Extractor,
    {
        self.execute(
            registry,
            Subject {
                expander,
                extractor: Some(extractor),
            },
        )
    }

    fn execute(&self, registry: &Registry, subject: Subject<'_>) -> TestSummary {
        let selected: Vec<_> = registry
            .iter()
            .filter(|(identity, spec)| self.matches_filter(identity, spec))
            .collect();
        tracing::debug!(
            selected = selected.len(),
            registered = registry.len(),
            extractor = subject.extractor.is_some(),
            "running conformance vectors"
        );

        let start = Instant::now();
        let results = if self.config.parallel {
            self.run_parallel(&selected, subject)
        } else {
            self.run_sequential(&selected, subject)
        };

        let mut summary = TestSummary::new();
        for result in results {
            summary.add_result(result);
        }
        summary.duration = start.elapsed();

        tracing::info!(
            passed = summary.passed,
            failed = summary.failed,
            errored = summary.errored,
            skipped = summary.skipped,
            "conformance run finished"
        );
        summary
    }

    fn matches_filter(&self, identity: &Identity, spec: &TestSpecification) -> bool {
        match &self.config.filter {
            Some(filter) => identity.as_str().contains(filter.as_str()) || spec.id.contains(filter.as_str()),
            None => true,
        }
    }

    fn run_sequential(
        &self,
        selected: &[(&Identity, &TestSpecification)],
        subject: Subject<'_>,
    ) -> Vec<TestResult> {
        selected
            .iter()
            .map(|(identity, spec)| Self::run_one(&self.config, identity, spec, subject))
            .collect()
    }

    /// Run vectors in parallel using a scoped rayon thread pool.
    ///
    /// The pool is torn down before this returns. If it cannot be built the
    /// vectors run sequentially instead.
    fn run_parallel(
        &self,
        selected: &[(&Identity, &TestSpecification)],
        subject: Subject<'_>,
    ) -> Vec<TestResult> {
        let config = &self.config;

        rayon::ThreadPoolBuilder::new()
            .build_scoped(rayon::ThreadBuilder::run, |pool| {
                pool.install(|| {
                    selected
                        .par_iter()
                        .map(|(identity, spec)| Self::run_one(config, identity, spec, subject))
                        .collect::<Vec<_>>()
                })
            })
            .unwrap_or_else(|e| {
                tracing::warn!("failed to create thread pool ({e}), running sequentially");
                self.run_sequential(selected, subject)
            })
    }

    /// Validate one already-resolved vector.
    fn run_one(
        config: &TestRunnerConfig,
        identity: &Identity,
        spec: &TestSpecification,
        subject: Subject<'_>,
    ) -> TestResult {
        let description = spec.description.clone();

        let (ceiling, what) = match spec.check {
            Check::Expansion => (config.max_level, "expands"),
            Check::Extraction => (config.max_extraction_level, "extracts"),
        };
        if spec.level > ceiling {
            return TestResult::skipped(
                identity.clone(),
                description,
                format!("requires level {}, runner {what} up to {ceiling}", spec.level),
            );
        }

        let start = Instant::now();
        let outcome = match (spec.check, subject.extractor) {
            (Check::Expansion, _) => validate(spec, subject.expander),
            (Check::Extraction, Some(extractor)) => validate_extraction(spec, extractor),
            (Check::Extraction, None) => {
                return TestResult::skipped(identity.clone(), description, "no extractor supplied".into())
            }
        };
        let duration = start.elapsed();

        match outcome {
            Outcome::Pass => TestResult::passed(identity.clone(), description, duration),
            Outcome::Fail(_) | Outcome::ExtractionFail(_) => {
                tracing::debug!(%identity, "vector failed");
                TestResult::failed(identity.clone(), description, outcome.to_string(), duration)
            }
            Outcome::Error(cause) => {
                tracing::debug!(%identity, %cause, "vector errored");
                TestResult::errored(identity.clone(), description, cause, duration)
            }
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
