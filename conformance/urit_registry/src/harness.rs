//! libtest host: one `#[test]` function per registered identity.
//!
//! libtest only runs functions that exist at compile time, so the test
//! functions are declared with [`conformance_tests!`], named after the
//! identities they run. A generated coverage test fails if the registry and
//! the declared names drift apart, so a vector can never silently go untested.

use crate::error::RegistryError;
use crate::expander::Expander;
use crate::extractor::Extractor;
use crate::identity::Identity;
use crate::outcome::Outcome;
use crate::registry::Registry;

/// Run one expansion identity and panic with a report unless it passes.
///
/// The panic message carries the identity, the vector description and the
/// actual versus expected values, which libtest prints per test.
pub fn assert_conformance<E>(registry: &Registry, identity: &str, expander: &E)
where
    E: Expander + ?Sized,
{
    report(registry, identity, registry.run(identity, expander));
}

/// Like [`assert_conformance`], running extraction identities through
/// `extractor` and expansion identities through `expander`.
pub fn assert_conformance_with<E, X>(registry: &Registry, identity: &str, expander: &E, extractor: &X)
where
    E: Expander + ?Sized,
    X: Extractor + ?Sized,
{
    report(registry, identity, registry.run_with(identity, expander, extractor));
}

fn report(registry: &Registry, identity: &str, result: Result<Outcome, RegistryError>) {
    match result {
        Ok(Outcome::Pass) => {}
        Ok(outcome @ (Outcome::Fail(_) | Outcome::ExtractionFail(_))) => {
            panic!("{identity}: {outcome}")
        }
        Ok(outcome @ Outcome::Error(_)) => {
            let description = registry
                .resolve(identity)
                .map(|spec| spec.description.as_str())
                .unwrap_or_default();
            panic!("{identity}: {description}: {outcome}");
        }
        Err(err) => panic!("{err}"),
    }
}

/// Check that `declared` names exactly the registry's identities.
pub fn assert_covers(registry: &Registry, declared: &[&str]) {
    let undeclared: Vec<&str> = registry
        .identities()
        .map(Identity::as_str)
        .filter(|identity| !declared.contains(identity))
        .collect();
    let unknown: Vec<&str> = declared
        .iter()
        .copied()
        .filter(|name| !registry.contains(name))
        .collect();

    assert!(
        undeclared.is_empty() && unknown.is_empty(),
        "declared tests out of sync with the registry\n  not declared: {undeclared:?}\n  not registered: {unknown:?}"
    );
}

/// Declare a module of `#[test]` functions, one per registered identity.
///
/// `registry` is evaluated inside each test and must produce a
/// `&Registry`; `expander` must produce something implementing
/// [`Expander`]. With an `extractor` (an [`Extractor`]) the list may also
/// name extraction identities. Items of the enclosing module are in scope.
///
/// ```text
/// conformance_tests! {
///     mod level_one {
///         registry = suite(),
///         expander = expand,
///         extractor = extract;
///         spec_examples_Level_1_Examples_Case_1_Expansion,
///         spec_examples_Level_1_Examples_Case_1_Extraction,
///     }
/// }
/// ```
///
/// Besides one test per name, the module contains `registry_is_covered`,
/// which fails when the list and the registry disagree. [`HostIdentifiers`]
/// never produces that name, nor a Rust keyword.
///
/// [`HostIdentifiers`]: crate::HostIdentifiers
#[macro_export]
macro_rules! conformance_tests {
    (
        mod $module:ident {
            registry = $registry:expr,
            expander = $expander:expr,
            extractor = $extractor:expr;
            $($identity:ident),+ $(,)?
        }
    ) => {
        #[allow(non_snake_case)]
        mod $module {
            #[allow(unused_imports)]
            use super::*;

            #[test]
            fn registry_is_covered() {
                $crate::assert_covers($registry, &[$(stringify!($identity)),+]);
            }

            $(
                #[test]
                fn $identity() {
                    $crate::assert_conformance_with(
                        $registry,
                        stringify!($identity),
                        &$expander,
                        &$extractor,
                    );
                }
            )+
        }
    };
    (
        mod $module:ident {
            registry = $registry:expr,
            expander = $expander:expr;
            $($identity:ident),+ $(,)?
        }
    ) => {
        #[allow(non_snake_case)]
        mod $module {
            #[allow(unused_imports)]
            use super::*;

            #[test]
            fn registry_is_covered() {
                $crate::assert_covers($registry, &[$(stringify!($identity)),+]);
            }

            $(
                #[test]
                fn $identity() {
                    $crate::assert_conformance($registry, stringify!($identity), &$expander);
                }
            )+
        }
    };
}
