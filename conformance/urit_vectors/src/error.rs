//! Errors raised while decoding test vectors.

use std::path::PathBuf;
use thiserror::Error;

/// A fixture could not be turned into test vectors.
///
/// Every variant names the fixture it came from so a broken data file can be
/// found without re-running the suite.
#[derive(Error, Debug)]
pub enum VectorError {
    /// The fixture file could not be read.
    #[error("failed to read fixture `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fixture is not valid JSON, or does not have the suite shape.
    #[error("{fixture}: invalid suite file")]
    Json {
        fixture: String,
        #[source]
        source: serde_json::Error,
    },

    /// A suite declares a level outside 1..=4.
    #[error("{fixture}: suite `{suite}` declares level {level}, expected 1 to 4")]
    InvalidLevel {
        fixture: String,
        suite: String,
        level: i64,
    },

    /// A variable value has a shape vectors cannot carry (e.g. nested lists).
    #[error("{fixture}: suite `{suite}` variable `{name}`: {reason}")]
    MalformedVariable {
        fixture: String,
        suite: String,
        name: String,
        reason: String,
    },

    /// A test case is not a `[template, expected]` pair.
    #[error("{fixture}: suite `{suite}` case {case}: {reason}")]
    MalformedCase {
        fixture: String,
        suite: String,
        case: usize,
        reason: String,
    },
}
