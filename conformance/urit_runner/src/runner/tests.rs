use pretty_assertions::assert_eq;
use urit_registry::{BoxError, Bindings, Extracted, VariableValue};

use super::*;
use crate::result::TestOutcome;

/// Substitutes `{name}` with scalar bindings; enough for level-1 vectors.
fn substitute(template: &str, bindings: &Bindings) -> Result<String, BoxError> {
    let mut out = template.to_string();
    for (name, value) in bindings {
        if let VariableValue::Scalar(value) = value {
            out = out.replace(&format!("{{{name}}}"), value);
        }
    }
    Ok(out)
}

/// Panics on one template, substitutes otherwise.
fn panics_on_boom(template: &str, bindings: &Bindings) -> Result<String, BoxError> {
    if template.contains("boom") {
        panic!("exploded on {template}");
    }
    substitute(template, bindings)
}

fn suite() -> Registry {
    Registry::load([
        TestSpecification::new("Level 1 Case 1", "{var}", "value")
            .with_binding("var", "value")
            .with_level(1),
        TestSpecification::new("Level 1 Case 2", "{hello}", "Hello%20World%21")
            .with_binding("hello", "Hello World!")
            .with_level(1),
        TestSpecification::new("Level 2 Case 1", "{+path}/here", "/foo/bar/here")
            .with_binding("path", "/foo/bar")
            .with_level(2),
        TestSpecification::new("Level 1 Case 3", "{boom}", "x")
            .with_binding("boom", "x")
            .with_level(1),
    ])
    .unwrap()
}

fn outcomes(summary: &TestSummary) -> Vec<(&str, &TestOutcome)> {
    summary
        .results
        .iter()
        .map(|r| (r.identity.as_str(), &r.outcome))
        .collect()
}

fn sequential() -> TestRunnerConfig {
    TestRunnerConfig {
        parallel: false,
        ..TestRunnerConfig::default()
    }
}

#[test]
fn test_results_follow_registry_order() {
    let summary = TestRunner::with_config(sequential()).run(&suite(), &substitute);

    let names: Vec<_> = summary.results.iter().map(|r| r.identity.as_str()).collect();
    assert_eq!(
        names,
        ["Level_1_Case_1", "Level_1_Case_2", "Level_2_Case_1", "Level_1_Case_3"]
    );
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn test_parallel_matches_sequential() {
    let registry = suite();
    let parallel = TestRunner::new().run(&registry, &panics_on_boom);
    let sequential = TestRunner::with_config(sequential()).run(&registry, &panics_on_boom);

    assert_eq!(outcomes(&parallel), outcomes(&sequential));
}

#[test]
fn test_panic_is_isolated() {
    let summary = TestRunner::with_config(sequential()).run(&suite(), &panics_on_boom);

    assert_eq!(summary.total(), 4);
    assert_eq!(summary.errored, 1);
    let errored = summary.failures().find(|r| r.outcome.is_errored()).unwrap();
    assert_eq!(errored.identity.as_str(), "Level_1_Case_3");
    assert_eq!(
        errored.outcome,
        TestOutcome::Errored("panicked: exploded on {boom}".into())
    );
}

#[test]
fn test_level_gating_skips() {
    let config = TestRunnerConfig {
        max_level: 1,
        ..sequential()
    };
    let summary = TestRunner::with_config(config).run(&suite(), &substitute);

    assert_eq!(summary.skipped, 1);
    let skipped = summary.results.iter().find(|r| r.outcome.is_skipped()).unwrap();
    assert_eq!(skipped.identity.as_str(), "Level_2_Case_1");
    assert_eq!(
        skipped.outcome,
        TestOutcome::Skipped("requires level 2, runner expands up to 1".into())
    );
}

#[test]
fn test_filter_matches_identity_or_source_id() {
    let by_identity = TestRunner::with_config(TestRunnerConfig {
        filter: Some("Level_2".into()),
        ..sequential()
    })
    .run(&suite(), &substitute);
    let names: Vec<_> = by_identity.results.iter().map(|r| r.identity.as_str()).collect();
    assert_eq!(names, ["Level_2_Case_1"]);

    let by_source = TestRunner::with_config(TestRunnerConfig {
        filter: Some("Level 1 Case 1".into()),
        ..sequential()
    })
    .run(&suite(), &substitute);
    assert_eq!(outcomes(&by_source), [("Level_1_Case_1", &TestOutcome::Passed)]);
}

#[test]
fn test_filter_without_matches() {
    let summary = TestRunner::with_config(TestRunnerConfig {
        filter: Some("no such vector".into()),
        ..TestRunnerConfig::default()
    })
    .run(&suite(), &substitute);

    assert_eq!(summary.total(), 0);
    assert_eq!(summary.exit_code(), 2);
}

#[test]
fn test_mismatch_message() {
    let summary = TestRunner::with_config(TestRunnerConfig {
        filter: Some("Level_1_Case_2".into()),
        ..sequential()
    })
    .run(&suite(), &substitute);

    assert_eq!(
        summary.results[0].outcome,
        TestOutcome::Failed("{hello}: expected `Hello%20World%21`, got `Hello World!`".into())
    );
}

/// Recovers a single `{name}` after a literal prefix, e.g. `X{#var}` from `X#value`.
fn after_operator(template: &str, uri: &str) -> Result<Option<Extracted>, BoxError> {
    let Some((prefix, expression)) = template.split_once('{') else {
        return Ok(None);
    };
    let expression = expression.trim_end_matches('}');
    let (operator, name) = match expression.strip_prefix(['#', '+']) {
        Some(name) => (&expression[..1], name),
        None => ("", expression),
    };
    let Some(value) = uri.strip_prefix(prefix).and_then(|rest| rest.strip_prefix(operator)) else {
        return Ok(None);
    };
    Ok(Some(Extracted::from([(name.to_string(), value.to_string())])))
}

/// Matches URIs but never recovers anything.
fn extracts_nothing(_: &str, _: &str) -> Result<Option<Extracted>, BoxError> {
    Ok(Some(Extracted::new()))
}

fn extraction_suite() -> Registry {
    Registry::load([
        TestSpecification::new("Level 2 Case 5 Expansion", "X{#var}", "X#value")
            .with_binding("var", "value")
            .with_level(2),
        TestSpecification::new("Level 2 Case 5 Extraction", "X{#var}", "X#value")
            .with_binding("var", "value")
            .with_level(2)
            .with_check(Check::Extraction),
        TestSpecification::new("Level 4 Case 1 Extraction", "{var:3}", "val")
            .with_binding("var", "value")
            .with_level(4)
            .with_check(Check::Extraction),
    ])
    .unwrap()
}

#[test]
fn test_extraction_passes() {
    let summary = TestRunner::with_config(TestRunnerConfig {
        filter: Some("Extraction".into()),
        ..sequential()
    })
    .run_with_extractor(&extraction_suite(), &substitute, &after_operator);

    assert_eq!(
        outcomes(&summary),
        [
            ("Level_2_Case_5_Extraction", &TestOutcome::Passed),
            (
                "Level_4_Case_1_Extraction",
                &TestOutcome::Skipped("requires level 4, runner extracts up to 3".into())
            ),
        ]
    );
}

#[test]
fn test_extraction_missing_variable_fails() {
    let summary = TestRunner::with_config(TestRunnerConfig {
        filter: Some("Level_2_Case_5_Extraction".into()),
        ..sequential()
    })
    .run_with_extractor(&extraction_suite(), &substitute, &extracts_nothing);

    assert_eq!(summary.failed, 1);
    assert_eq!(
        summary.results[0].outcome,
        TestOutcome::Failed("X{#var}: extracting `X#value` gave missing variables `var`".into())
    );
}

#[test]
fn test_extraction_level_is_separate() {
    let config = TestRunnerConfig {
        max_level: 1,
        max_extraction_level: 4,
        ..sequential()
    };
    let summary = TestRunner::with_config(config).run_with_extractor(
        &extraction_suite(),
        &substitute,
        &after_operator,
    );

    let skipped: Vec<_> = summary
        .results
        .iter()
        .filter(|r| r.outcome.is_skipped())
        .map(|r| r.identity.as_str())
        .collect();
    assert_eq!(skipped, ["Level_2_Case_5_Expansion"]);
}

#[test]
fn test_extraction_without_extractor_is_skipped() {
    let summary = TestRunner::with_config(sequential()).run(&extraction_suite(), &substitute);

    assert_eq!(
        summary.results[1].outcome,
        TestOutcome::Skipped("no extractor supplied".into())
    );
    assert_eq!(summary.skipped, 2);
}
