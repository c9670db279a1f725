//! Test vectors for URI template conformance suites.
//!
//! A test vector ([`TestSpecification`]) pairs a URI template and a set of
//! variable bindings with the expansion(s) an implementation must produce.
//! Its [`Check`] says whether the vector exercises expansion, or extraction
//! of the variables back out of the expanded URIs.
//!
//! # Sources
//!
//! Vectors can be built in code with the builder methods on
//! [`TestSpecification`], or decoded from the JSON suite format used by the
//! uritemplate-test corpus:
//!
//! ```text
//! {
//!   "Level 1 Examples": {
//!     "level": 1,
//!     "variables": { "var": "value", "hello": "Hello World!" },
//!     "testcases": [
//!       ["{var}", "value"],
//!       ["{hello}", "Hello%20World%21"]
//!     ]
//!   }
//! }
//! ```
//!
//! See [`decode_suites`] and [`load_fixture`].

mod check;
mod error;
mod expected;
mod fixture;
mod spec;
mod value;

pub use check::Check;
pub use error::VectorError;
pub use expected::Expected;
pub use fixture::{decode_suites, load_fixture, DEFAULT_LEVEL};
pub use spec::TestSpecification;
pub use value::{Bindings, VariableValue};
