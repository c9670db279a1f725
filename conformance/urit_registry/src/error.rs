//! Structural registry errors.
//!
//! These describe a broken vector set or a host/registry desync, never a
//! defect in the expander under test. Per-vector results are [`Outcome`]s.
//!
//! [`Outcome`]: crate::Outcome

use crate::identity::Identity;
use thiserror::Error;
use urit_vectors::Check;

/// A registry could not be built or queried.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// The input contained no vectors.
    #[error("no test specifications to register; refusing to build an empty suite")]
    EmptyInput,

    /// Two vectors synthesize the same identity.
    #[error("test specifications `{first}` and `{second}` both map to the test name `{identity}`")]
    DuplicateIdentifier {
        identity: Identity,
        first: String,
        second: String,
    },

    /// The process-wide registry was loaded a second time.
    #[error("the suite registry is already loaded")]
    AlreadyLoaded,

    /// No vector is registered under this identity.
    #[error("no test specification is registered as `{0}`")]
    UnknownIdentity(String),

    /// The identity was run through the wrong operation, e.g. an extraction
    /// vector handed only an expander.
    #[error("`{identity}` is an {registered} test and cannot be run as {requested}")]
    CheckMismatch {
        identity: String,
        registered: Check,
        requested: Check,
    },
}
