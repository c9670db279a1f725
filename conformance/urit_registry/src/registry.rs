//! The frozen identity → vector mapping.

use std::any::Any;
use std::collections::hash_map::Entry as MapEntry;
use std::panic::{catch_unwind, AssertUnwindSafe};

use rustc_hash::FxHashMap;
use urit_vectors::{Check, TestSpecification};

use crate::error::RegistryError;
use crate::expander::Expander;
use crate::extractor::Extractor;
use crate::identity::{HostIdentifiers, Identity, NameScheme};
use crate::outcome::{ExtractionMismatch, ExtractionProblem, Mismatch, Outcome};

/// A loaded, read-only set of test vectors keyed by synthesized identity.
///
/// There is no way to add or change entries after [`Registry::load`]
/// returns, so `&Registry` can be shared freely between test threads.
#[derive(Debug)]
pub struct Registry {
    /// Entries in input order.
    entries: Vec<(Identity, TestSpecification)>,
    /// Identity → position in `entries`.
    index: FxHashMap<Identity, usize>,
}

impl Registry {
    /// Register `specs` under [`HostIdentifiers`] names.
    pub fn load<I>(specs: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = TestSpecification>,
    {
        Self::load_with(&HostIdentifiers, specs)
    }

    /// Register `specs`, naming each entry with `scheme`.
    ///
    /// Fails with [`RegistryError::EmptyInput`] for an empty sequence and with
    /// [`RegistryError::DuplicateIdentifier`] as soon as two identifiers map
    /// to the same name.
    pub fn load_with<S, I>(scheme: &S, specs: I) -> Result<Self, RegistryError>
    where
        S: NameScheme + ?Sized,
        I: IntoIterator<Item = TestSpecification>,
    {
        let mut entries: Vec<(Identity, TestSpecification)> = Vec::new();
        let mut index: FxHashMap<Identity, usize> = FxHashMap::default();

        for spec in specs {
            let identity = Identity::from_scheme(scheme, &spec.id);
            match index.entry(identity.clone()) {
                MapEntry::Occupied(slot) => {
                    let first = entries[*slot.get()].1.id.clone();
                    tracing::warn!(%identity, %first, second = %spec.id, "duplicate test identity");
                    return Err(RegistryError::DuplicateIdentifier {
                        identity,
                        first,
                        second: spec.id,
                    });
                }
                MapEntry::Vacant(slot) => {
                    slot.insert(entries.len());
                    entries.push((identity, spec));
                }
            }
        }

        if entries.is_empty() {
            return Err(RegistryError::EmptyInput);
        }

        tracing::debug!(count = entries.len(), "registry loaded");
        Ok(Registry { entries, index })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: loading rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identities in input order. Can be re-enumerated any number of times.
    pub fn identities(&self) -> impl ExactSizeIterator<Item = &Identity> + DoubleEndedIterator {
        self.entries.iter().map(|(identity, _)| identity)
    }

    /// Identity/vector pairs in input order.
    pub fn iter(
        &self,
    ) -> impl ExactSizeIterator<Item = (&Identity, &TestSpecification)> + DoubleEndedIterator {
        self.entries.iter().map(|(identity, spec)| (identity, spec))
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.index.contains_key(identity)
    }

    /// The vector registered as `identity`.
    pub fn resolve(&self, identity: &str) -> Result<&TestSpecification, RegistryError> {
        self.index
            .get(identity)
            .map(|&i| &self.entries[i].1)
            .ok_or_else(|| RegistryError::UnknownIdentity(identity.to_string()))
    }

    /// Run the expansion vector registered as `identity` against `expander`.
    ///
    /// Only structural problems are an `Err`: an unknown identity, or one
    /// registered as an extraction vector. Every result of the expansion
    /// itself, including a panic, is reported as an [`Outcome`].
    pub fn run<E>(&self, identity: &str, expander: &E) -> Result<Outcome, RegistryError>
    where
        E: Expander + ?Sized,
    {
        let spec = self.resolve_check(identity, Check::Expansion)?;
        let _span = tracing::trace_span!("run", %identity).entered();
        Ok(validate(spec, expander))
    }

    /// Run the extraction vector registered as `identity` against `extractor`.
    pub fn run_extraction<X>(&self, identity: &str, extractor: &X) -> Result<Outcome, RegistryError>
    where
        X: Extractor + ?Sized,
    {
        let spec = self.resolve_check(identity, Check::Extraction)?;
        let _span = tracing::trace_span!("run_extraction", %identity).entered();
        Ok(validate_extraction(spec, extractor))
    }

    /// Run `identity` through whichever operation it was registered for.
    pub fn run_with<E, X>(
        &self,
        identity: &str,
        expander: &E,
        extractor: &X,
    ) -> Result<Outcome, RegistryError>
    where
        E: Expander + ?Sized,
        X: Extractor + ?Sized,
    {
        match self.resolve(identity)?.check {
            Check::Expansion => self.run(identity, expander),
            Check::Extraction => self.run_extraction(identity, extractor),
        }
    }

    fn resolve_check(&self, identity: &str, requested: Check) -> Result<&TestSpecification, RegistryError> {
        let spec = self.resolve(identity)?;
        if spec.check == requested {
            Ok(spec)
        } else {
            Err(RegistryError::CheckMismatch {
                identity: identity.to_string(),
                registered: spec.check,
                requested,
            })
        }
    }
}

/// Expand one vector and judge the result.
pub fn validate<E>(spec: &TestSpecification, expander: &E) -> Outcome
where
    E: Expander + ?Sized,
{
    let expanded = catch_unwind(AssertUnwindSafe(|| {
        expander.expand(&spec.template, &spec.bindings)
    }));

    let outcome = match expanded {
        Ok(Ok(actual)) if spec.expected.accepts(&actual) => Outcome::Pass,
        Ok(Ok(actual)) => Outcome::Fail(Mismatch {
            actual,
            expected: spec.expected.clone(),
            description: spec.description.clone(),
        }),
        Ok(Err(_)) if spec.expected.is_rejection() => Outcome::Pass,
        Ok(Err(err)) => Outcome::Error(err.to_string()),
        Err(payload) => Outcome::Error(format!("panicked: {}", panic_message(payload.as_ref()))),
    };

    tracing::trace!(id = %spec.id, passed = outcome.is_pass(), "validated");
    outcome
}

/// Extract variables from every acceptable URI of one vector.
///
/// Each URI must match the template and yield exactly the template's
/// variables; the values themselves are not compared, since prefix
/// modifiers make them differ from the bindings. The first URI that fails
/// decides the outcome.
pub fn validate_extraction<X>(spec: &TestSpecification, extractor: &X) -> Outcome
where
    X: Extractor + ?Sized,
{
    if spec.expected.is_rejection() {
        return Outcome::Error("a rejection vector has no URI to extract from".to_string());
    }

    let variables = spec.template_variables();
    let outcome = spec
        .expected
        .alternatives()
        .iter()
        .find_map(|uri| extraction_failure(spec, &variables, uri, extractor))
        .unwrap_or(Outcome::Pass);

    tracing::trace!(id = %spec.id, passed = outcome.is_pass(), "validated extraction");
    outcome
}

fn extraction_failure<X>(
    spec: &TestSpecification,
    variables: &[&str],
    uri: &str,
    extractor: &X,
) -> Option<Outcome>
where
    X: Extractor + ?Sized,
{
    let extracted = catch_unwind(AssertUnwindSafe(|| extractor.extract(&spec.template, uri)));

    let problem = match extracted {
        Ok(Ok(Some(values))) => {
            let missing: Vec<String> = variables
                .iter()
                .filter(|name| !values.contains_key(**name))
                .map(|name| (*name).to_string())
                .collect();
            let unexpected: Vec<String> = values
                .keys()
                .filter(|name| !variables.contains(&name.as_str()))
                .cloned()
                .collect();

            match (missing.is_empty(), unexpected.is_empty()) {
                (true, true) => return None,
                (false, _) => ExtractionProblem::Missing(missing),
                (true, false) => ExtractionProblem::Unexpected(unexpected),
            }
        }
        Ok(Ok(None)) => ExtractionProblem::NoMatch,
        Ok(Err(err)) => return Some(Outcome::Error(err.to_string())),
        Err(payload) => {
            return Some(Outcome::Error(format!("panicked: {}", panic_message(payload.as_ref()))))
        }
    };

    Some(Outcome::ExtractionFail(ExtractionMismatch {
        uri: uri.to_string(),
        problem,
        description: spec.description.clone(),
    }))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "implementation panicked".to_string()
    }
}
