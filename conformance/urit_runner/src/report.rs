//! Plain-text run summaries.

use std::fmt::Write;

use crate::result::{TestOutcome, TestSummary};

/// Render `summary` as the text a host prints after a run.
///
/// Failures and errors are always listed; passes and skips only when
/// `verbose` is set.
pub fn render_summary(summary: &TestSummary, verbose: bool) -> String {
    let mut out = String::new();

    for result in &summary.results {
        let identity = &result.identity;
        // Writing to a String cannot fail.
        let _ = match &result.outcome {
            TestOutcome::Failed(message) => writeln!(out, "FAIL  {identity}: {message}"),
            TestOutcome::Errored(cause) => {
                writeln!(out, "ERROR {identity}: {}: {cause}", result.description)
            }
            TestOutcome::Passed if verbose => writeln!(
                out,
                "PASS  {identity} ({:.2?})",
                result.duration
            ),
            TestOutcome::Skipped(reason) if verbose => writeln!(out, "SKIP  {identity}: {reason}"),
            TestOutcome::Passed | TestOutcome::Skipped(_) => Ok(()),
        };
    }

    if !out.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "{} vectors: {} passed, {} failed, {} errored, {} skipped ({:.2?})",
        summary.total(),
        summary.passed,
        summary.failed,
        summary.errored,
        summary.skipped,
        summary.duration
    );
    out.push_str(match summary.exit_code() {
        0 => "OK",
        2 => "NO TESTS FOUND",
        _ => "FAILED",
    });
    out.push('\n');
    out
}
