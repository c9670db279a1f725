//! Expected expansion results.

use std::fmt;

/// What an expansion of a vector's template must produce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expected {
    /// Exactly this string.
    One(String),
    /// Any one of these strings.
    ///
    /// Used when map iteration order makes several expansions valid.
    AnyOf(Vec<String>),
    /// The expansion must fail (malformed template or unsupported value).
    Rejected,
}

impl Expected {
    /// Whether `actual` satisfies this expectation.
    ///
    /// A rejection is never satisfied by a produced string.
    pub fn accepts(&self, actual: &str) -> bool {
        match self {
            Expected::One(expected) => expected == actual,
            Expected::AnyOf(alternatives) => alternatives.iter().any(|alt| alt == actual),
            Expected::Rejected => false,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, Expected::Rejected)
    }

    /// The acceptable strings, in declaration order.
    pub fn alternatives(&self) -> &[String] {
        match self {
            Expected::One(expected) => std::slice::from_ref(expected),
            Expected::AnyOf(alternatives) => alternatives,
            Expected::Rejected => &[],
        }
    }
}

impl From<&str> for Expected {
    fn from(value: &str) -> Self {
        Expected::One(value.to_string())
    }
}

impl From<String> for Expected {
    fn from(value: String) -> Self {
        Expected::One(value)
    }
}

impl From<Vec<&str>> for Expected {
    fn from(alternatives: Vec<&str>) -> Self {
        Expected::AnyOf(alternatives.into_iter().map(str::to_string).collect())
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::One(expected) => write!(f, "`{expected}`"),
            Expected::AnyOf(alternatives) => {
                write!(f, "one of ")?;
                for (i, alt) in alternatives.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "`{alt}`")?;
                }
                Ok(())
            }
            Expected::Rejected => write!(f, "an expansion error"),
        }
    }
}
