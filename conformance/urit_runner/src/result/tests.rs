use std::time::Duration;

use pretty_assertions::assert_eq;
use urit_registry::synthesize;

use super::*;

fn passed(id: &str) -> TestResult {
    TestResult::passed(synthesize(id), id.into(), Duration::from_millis(1))
}

#[test]
fn test_outcome_predicates() {
    assert!(TestOutcome::Passed.is_passed());
    assert!(!TestOutcome::Passed.is_failed());
    assert!(TestOutcome::Failed("mismatch".into()).is_failed());
    assert!(TestOutcome::Errored("boom".into()).is_errored());
    assert!(!TestOutcome::Errored("boom".into()).is_failed());
    assert!(TestOutcome::Skipped("reason".into()).is_skipped());
}

#[test]
fn test_summary_counts() {
    let mut summary = TestSummary::new();
    summary.add_result(passed("a"));
    summary.add_result(TestResult::failed(
        synthesize("b"),
        "b".into(),
        "mismatch".into(),
        Duration::from_millis(2),
    ));
    summary.add_result(TestResult::errored(
        synthesize("c"),
        "c".into(),
        "boom".into(),
        Duration::ZERO,
    ));
    summary.add_result(TestResult::skipped(synthesize("d"), "d".into(), "level".into()));

    assert_eq!(summary.passed, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.errored, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.total(), 4);
    assert!(summary.has_failures());

    let failing: Vec<_> = summary.failures().map(|r| r.identity.as_str()).collect();
    assert_eq!(failing, ["b", "c"]);
}

#[test]
fn test_summary_exit_code() {
    let mut summary = TestSummary::new();
    assert_eq!(summary.exit_code(), 2); // No tests

    summary.add_result(passed("a"));
    assert_eq!(summary.exit_code(), 0);

    summary.add_result(TestResult::skipped(synthesize("s"), "s".into(), "level".into()));
    assert_eq!(summary.exit_code(), 0); // Skips are not failures

    summary.errored = 1;
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn test_only_skipped_is_not_empty() {
    let mut summary = TestSummary::new();
    summary.add_result(TestResult::skipped(synthesize("s"), "s".into(), "level".into()));
    assert_eq!(summary.exit_code(), 0);
}
