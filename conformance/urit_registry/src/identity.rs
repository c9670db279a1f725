//! Test identities synthesized from vector identifiers.

use std::borrow::Borrow;
use std::fmt;

/// The runnable name of one registered vector.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(Box<str>);

impl Identity {
    pub(crate) fn from_scheme<S: NameScheme + ?Sized>(scheme: &S, id: &str) -> Self {
        Identity(scheme.synthesize(id).into_boxed_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identity {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps a vector identifier to the name a host runner invokes it by.
///
/// Implementations must be pure: the same identifier always yields the same
/// name. Collisions are detected by the registry, not the scheme.
pub trait NameScheme: Send + Sync {
    fn synthesize(&self, id: &str) -> String;
}

/// Names valid as Rust (and most test-runner) identifiers.
///
/// ASCII letters, digits and `_` are kept; anything else becomes `_`.
/// Names that would not start with a letter get a `v_` prefix, and so do
/// Rust keywords and the coverage test `conformance_tests!` generates.
///
/// | identifier                       | identity                           |
/// |----------------------------------|------------------------------------|
/// | `simple-string`                  | `simple_string`                    |
/// | `Level 1 Examples Case 2`        | `Level_1_Examples_Case_2`          |
/// | `3.2.1 Variable Expansion Case 1`| `v_3_2_1_Variable_Expansion_Case_1`|
/// | `type`                           | `v_type`                           |
#[derive(Clone, Copy, Debug, Default)]
pub struct HostIdentifiers;

/// Strict and reserved keywords of every edition, plus the generated
/// coverage test.
const RESERVED: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "registry_is_covered", "return", "self", "static", "struct", "super", "trait",
    "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while",
    "yield",
];

impl NameScheme for HostIdentifiers {
    fn synthesize(&self, id: &str) -> String {
        let sanitized: String = id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if id.starts_with(|c: char| c.is_ascii_alphabetic()) && !RESERVED.contains(&sanitized.as_str()) {
            sanitized
        } else {
            format!("v_{sanitized}")
        }
    }
}

/// Synthesize an identity with the default [`HostIdentifiers`] scheme.
pub fn synthesize(id: &str) -> Identity {
    Identity::from_scheme(&HostIdentifiers, id)
}
