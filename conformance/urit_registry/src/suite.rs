//! Process-wide, write-once registry slot.

use std::sync::OnceLock;

use urit_vectors::TestSpecification;

use crate::error::RegistryError;
use crate::expander::Expander;
use crate::extractor::Extractor;
use crate::identity::Identity;
use crate::outcome::Outcome;
use crate::registry::Registry;

/// A registry that is loaded once per process and frozen from then on.
///
/// Intended for `static` use by test hosts:
///
/// ```text
/// static SUITE: SuiteRegistry = SuiteRegistry::new();
///
/// fn suite() -> &'static Registry {
///     SUITE.get_or_load(|| load_fixture(path).unwrap_or_else(|e| panic!("{e}")))
///          .unwrap_or_else(|e| panic!("{e}"))
/// }
/// ```
///
/// The outcome of the first load, success or failure, is kept: every later
/// access sees the same registry or the same setup error.
#[derive(Debug, Default)]
pub struct SuiteRegistry {
    slot: OnceLock<Result<Registry, RegistryError>>,
}

impl SuiteRegistry {
    pub const fn new() -> Self {
        SuiteRegistry {
            slot: OnceLock::new(),
        }
    }

    /// Load the suite. Fails with [`RegistryError::AlreadyLoaded`] if a load
    /// has already happened, whatever its result.
    pub fn load<I>(&self, specs: I) -> Result<&Registry, RegistryError>
    where
        I: IntoIterator<Item = TestSpecification>,
    {
        if self.slot.get().is_some() {
            return Err(RegistryError::AlreadyLoaded);
        }

        let mut loaded_here = false;
        let result = self.slot.get_or_init(|| {
            loaded_here = true;
            Registry::load(specs)
        });

        if loaded_here {
            result.as_ref().map_err(Clone::clone)
        } else {
            Err(RegistryError::AlreadyLoaded)
        }
    }

    /// Load the suite on first use; later calls return the first result.
    ///
    /// Safe to call from many test threads at once: `specs` runs at most once.
    pub fn get_or_load<F, I>(&self, specs: F) -> Result<&Registry, RegistryError>
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = TestSpecification>,
    {
        self.slot
            .get_or_init(|| Registry::load(specs()))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// The frozen registry, if a load has succeeded.
    pub fn registry(&self) -> Option<&Registry> {
        self.slot.get().and_then(|result| result.as_ref().ok())
    }

    pub fn is_loaded(&self) -> bool {
        self.registry().is_some()
    }

    /// Identities in input order; empty before a successful load.
    pub fn identities(&self) -> impl Iterator<Item = &Identity> {
        self.registry().into_iter().flat_map(Registry::identities)
    }

    /// Like [`Registry::resolve`]. Before a successful load every identity is
    /// unknown.
    pub fn resolve(&self, identity: &str) -> Result<&TestSpecification, RegistryError> {
        self.loaded(identity)?.resolve(identity)
    }

    /// Like [`Registry::run`]. Before a successful load every identity is
    /// unknown.
    pub fn run<E>(&self, identity: &str, expander: &E) -> Result<Outcome, RegistryError>
    where
        E: Expander + ?Sized,
    {
        self.loaded(identity)?.run(identity, expander)
    }

    /// Like [`Registry::run_extraction`].
    pub fn run_extraction<X>(&self, identity: &str, extractor: &X) -> Result<Outcome, RegistryError>
    where
        X: Extractor + ?Sized,
    {
        self.loaded(identity)?.run_extraction(identity, extractor)
    }

    fn loaded(&self, identity: &str) -> Result<&Registry, RegistryError> {
        self.registry().ok_or_else(|| {
            tracing::warn!(identity, "registry queried before it was loaded");
            RegistryError::UnknownIdentity(identity.to_string())
        })
    }
}
