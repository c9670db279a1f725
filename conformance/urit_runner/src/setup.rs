//! Suite setup: named fixture files into one frozen registry.

use std::path::Path;

use thiserror::Error;
use urit_registry::{Registry, RegistryError};
use urit_vectors::{load_fixture, VectorError};

/// The suite could not be set up. No test has run when this is returned.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error(transparent)]
    Vector(#[from] VectorError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Decode `fixtures` in order and register every vector they contain.
///
/// Identifiers carry the fixture file stem, so the same suite name in two
/// files does not collide. Any decode or registration error aborts setup.
pub fn load_suite<P: AsRef<Path>>(fixtures: &[P]) -> Result<Registry, SetupError> {
    let mut specs = Vec::new();
    for fixture in fixtures {
        let decoded = load_fixture(fixture.as_ref())?;
        tracing::debug!(
            fixture = %fixture.as_ref().display(),
            vectors = decoded.len(),
            "loaded fixture"
        );
        specs.extend(decoded);
    }

    let registry = Registry::load(specs)?;
    tracing::info!(
        fixtures = fixtures.len(),
        vectors = registry.len(),
        "suite ready"
    );
    Ok(registry)
}
