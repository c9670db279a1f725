//! What a vector checks.

use std::fmt;

/// The operation a vector exercises.
///
/// An expansion vector expands the template and compares the result. An
/// extraction vector runs the other way: each acceptable URI is matched
/// back against the template and every template variable must come back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Check {
    #[default]
    Expansion,
    Extraction,
}

impl Check {
    /// Suffix appended to decoded vector identifiers.
    pub fn suffix(self) -> &'static str {
        match self {
            Check::Expansion => "Expansion",
            Check::Extraction => "Extraction",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::Expansion => write!(f, "expansion"),
            Check::Extraction => write!(f, "extraction"),
        }
    }
}
