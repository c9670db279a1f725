//! Dynamic test registry for URI template conformance vectors.
//!
//! Turns an ordered collection of [`TestSpecification`]s into a frozen
//! [`Registry`] of independently runnable test entries:
//!
//! - **Name synthesis**: every vector identifier maps to an [`Identity`] that
//!   is a valid test-function name (see [`HostIdentifiers`]). Two vectors
//!   mapping to the same identity fail the load instead of merging.
//! - **Resolution**: identities resolve back to their vector.
//! - **Validation**: [`Registry::run`] expands one vector with the
//!   [`Expander`] under test and compares against the expectation. Expander
//!   errors and panics become [`Outcome::Error`] so one broken vector never
//!   stops the rest.
//! - **Extraction**: vectors whose [`Check`] is extraction run the other way
//!   through an [`Extractor`] ([`Registry::run_extraction`]), and every
//!   template variable must be recovered from each acceptable URI.
//!
//! A registry has no mutation API once loaded, so it can be shared across
//! test threads without locking. [`SuiteRegistry`] wraps one in a write-once
//! slot for hosts that need a process-wide instance, and the
//! [`conformance_tests!`] macro registers one `#[test]` per identity.

mod error;
mod expander;
mod extractor;
mod harness;
mod identity;
mod outcome;
mod registry;
mod suite;

pub use error::RegistryError;
pub use expander::{BoxError, Expander};
pub use extractor::{Extracted, Extractor};
pub use harness::{assert_conformance, assert_conformance_with, assert_covers};
pub use identity::{synthesize, HostIdentifiers, Identity, NameScheme};
pub use outcome::{ExtractionMismatch, ExtractionProblem, Mismatch, Outcome};
pub use registry::{validate, validate_extraction, Registry};
pub use suite::SuiteRegistry;

pub use urit_vectors::{Bindings, Check, Expected, TestSpecification, VariableValue};
