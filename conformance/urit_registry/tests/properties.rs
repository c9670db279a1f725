//! Property tests for the registry laws.
//!
//! 1. Round trip: every listed identity resolves to the vector it came from,
//!    and there are exactly as many identities as vectors.
//! 2. Collisions: identifiers that synthesize the same name always fail the
//!    load, in either order.
//! 3. Verdicts: a run passes exactly when the expansion is acceptable.
//! 4. Names: every synthesized identity is a plain Rust identifier.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use std::collections::HashSet;

use proptest::prelude::*;
use urit_registry::{synthesize, Bindings, Outcome, Registry, RegistryError, TestSpecification};

/// Identifiers as they show up in fixtures: words, digits, spaces and punctuation.
fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9 ._-]{1,24}").expect("valid regex")
}

/// Identifiers whose synthesized names are pairwise distinct.
fn unique_identifiers() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(identifier_strategy(), 1..32).prop_map(|ids| {
        let mut seen = HashSet::new();
        ids.into_iter()
            .filter(|id| seen.insert(synthesize(id)))
            .collect()
    })
}

fn vector(id: &str) -> TestSpecification {
    TestSpecification::new(id, format!("{{{id}}}"), id)
}

fn constant(output: String) -> impl Fn(&str, &Bindings) -> Result<String, String> {
    move |_: &str, _: &Bindings| Ok(output.clone())
}

proptest! {
    #[test]
    fn identities_round_trip(ids in unique_identifiers()) {
        let specs: Vec<_> = ids.iter().map(|id| vector(id)).collect();
        let registry = Registry::load(specs.clone()).unwrap();

        prop_assert_eq!(registry.identities().len(), specs.len());
        for (identity, spec) in registry.identities().zip(&specs) {
            prop_assert_eq!(identity, &synthesize(&spec.id));
            prop_assert_eq!(registry.resolve(identity.as_str()).unwrap(), spec);
        }
    }

    #[test]
    fn enumeration_is_idempotent(ids in unique_identifiers()) {
        let registry = Registry::load(ids.iter().map(|id| vector(id))).unwrap();
        let first: Vec<_> = registry.identities().cloned().collect();
        let second: Vec<_> = registry.identities().cloned().collect();
        prop_assert_eq!(&first, &second);

        for identity in &first {
            let once = registry.resolve(identity.as_str()).unwrap();
            let twice = registry.resolve(identity.as_str()).unwrap();
            prop_assert!(std::ptr::eq(once, twice));
        }
    }

    #[test]
    fn colliding_identifiers_fail_in_any_order(
        stem in "[a-z]{1,8}",
        left in "[ ._-]",
        right in "[ ._-]",
        swap in any::<bool>(),
    ) {
        let a = format!("{stem}{left}x");
        let b = format!("{stem}{right}x");
        prop_assume!(a != b);

        let (first, second) = if swap { (b, a) } else { (a, b) };
        let err = Registry::load([vector(&first), vector(&second)]).unwrap_err();
        prop_assert!(
            matches!(err, RegistryError::DuplicateIdentifier { .. }),
            "unexpected error {:?}",
            err
        );
    }

    #[test]
    fn run_passes_iff_output_is_acceptable(expected in "[a-z]{0,6}", actual in "[a-z]{0,6}") {
        let spec = TestSpecification::new("case", "{var}", expected.as_str());
        let registry = Registry::load([spec]).unwrap();

        let outcome = registry.run("case", &constant(actual.clone())).unwrap();
        if actual == expected {
            prop_assert_eq!(outcome, Outcome::Pass);
        } else {
            let Outcome::Fail(mismatch) = outcome else {
                return Err(TestCaseError::fail("expected a failure"));
            };
            prop_assert_eq!(mismatch.actual, actual);
            prop_assert!(mismatch.expected.accepts(&expected));
        }
    }
}

proptest! {
    #[test]
    fn synthesized_names_are_identifiers(id in any::<String>()) {
        let identity = synthesize(&id);
        let name = identity.as_str();

        prop_assert!(name.starts_with(|c: char| c.is_ascii_alphabetic()), "{}", name);
        prop_assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'), "{}", name);
        prop_assert_ne!(name, "registry_is_covered");
    }
}

#[test]
fn keywords_never_pass_through() {
    for keyword in ["fn", "mod", "self", "Self", "super", "crate", "type", "match", "dyn"] {
        let identity = synthesize(keyword);
        assert_eq!(identity.as_str(), format!("v_{keyword}"));
    }
}

#[test]
fn empty_input_never_freezes() {
    let err = Registry::load(Vec::<TestSpecification>::new()).unwrap_err();
    assert_eq!(err, RegistryError::EmptyInput);
}
