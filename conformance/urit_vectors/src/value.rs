//! Variable values bound into a template expansion.

use indexmap::IndexMap;
use std::fmt;

/// Variable bindings for one expansion, in declaration order.
pub type Bindings = IndexMap<String, VariableValue>;

/// The value bound to a template variable.
///
/// Mirrors the four shapes RFC 6570 distinguishes: undefined, a string, a
/// list of strings, and an associative array of string pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VariableValue {
    /// Explicitly bound to null. Expanders treat it like an absent variable.
    Undefined,
    /// A single string value.
    Scalar(String),
    /// An ordered list of values.
    List(Vec<String>),
    /// Ordered key/value pairs.
    Map(IndexMap<String, String>),
}

impl VariableValue {
    /// Build a map value from key/value pairs, keeping their order.
    pub fn map<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        VariableValue::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, VariableValue::Undefined)
    }

    /// RFC 6570 treats empty lists and maps as undefined.
    pub fn is_empty_composite(&self) -> bool {
        match self {
            VariableValue::List(items) => items.is_empty(),
            VariableValue::Map(pairs) => pairs.is_empty(),
            VariableValue::Undefined | VariableValue::Scalar(_) => false,
        }
    }
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        VariableValue::Scalar(value.to_string())
    }
}

impl From<String> for VariableValue {
    fn from(value: String) -> Self {
        VariableValue::Scalar(value)
    }
}

impl From<Vec<&str>> for VariableValue {
    fn from(items: Vec<&str>) -> Self {
        VariableValue::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for VariableValue {
    fn from(items: Vec<String>) -> Self {
        VariableValue::List(items)
    }
}

impl<T: Into<VariableValue>> From<Option<T>> for VariableValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(VariableValue::Undefined, Into::into)
    }
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableValue::Undefined => write!(f, "null"),
            VariableValue::Scalar(s) => write!(f, "{s:?}"),
            VariableValue::List(items) => write!(f, "{items:?}"),
            VariableValue::Map(pairs) => {
                write!(f, "{{")?;
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k:?}: {v:?}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
