//! Per-vector results.

use std::fmt;
use urit_vectors::Expected;

/// Result of running one registered vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The expansion matched the expectation.
    Pass,
    /// The expansion produced the wrong string.
    Fail(Mismatch),
    /// Extraction did not recover the template's variables from a URI.
    ExtractionFail(ExtractionMismatch),
    /// The expander or extractor returned an error or panicked.
    Error(String),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail(_) | Outcome::ExtractionFail(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass => write!(f, "passed"),
            Outcome::Fail(mismatch) => write!(f, "{mismatch}"),
            Outcome::ExtractionFail(mismatch) => write!(f, "{mismatch}"),
            Outcome::Error(cause) => write!(f, "implementation failed: {cause}"),
        }
    }
}

/// What was produced versus what was expected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub actual: String,
    pub expected: Expected,
    /// Description of the originating vector.
    pub description: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, got `{}`",
            self.description, self.expected, self.actual
        )
    }
}

/// Why extraction from one URI was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractionProblem {
    /// The extractor reported that the URI does not match the template.
    NoMatch,
    /// Template variables absent from the result.
    Missing(Vec<String>),
    /// Names in the result that the template does not declare.
    Unexpected(Vec<String>),
}

/// Which URI failed extraction, and how.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractionMismatch {
    pub uri: String,
    pub problem: ExtractionProblem,
    /// Description of the originating vector.
    pub description: String,
}

impl fmt::Display for ExtractionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (what, names) = match &self.problem {
            ExtractionProblem::NoMatch => {
                return write!(f, "{}: `{}` did not match the template", self.description, self.uri)
            }
            ExtractionProblem::Missing(names) => ("missing", names),
            ExtractionProblem::Unexpected(names) => ("unexpected", names),
        };
        write!(f, "{}: extracting `{}` gave {what} variables", self.description, self.uri)?;
        for (i, name) in names.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}`{name}`")?;
        }
        Ok(())
    }
}
