//! A single test vector.

use crate::check::Check;
use crate::expected::Expected;
use crate::fixture::DEFAULT_LEVEL;
use crate::value::{Bindings, VariableValue};

/// One data-driven test vector: template and bindings in, expansion out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestSpecification {
    /// Stable identifier, unique within a loaded set.
    pub id: String,
    /// Human-readable description used in failure reports.
    pub description: String,
    /// URI template source.
    pub template: String,
    /// Variables available to the expansion.
    pub bindings: Bindings,
    /// Acceptable result(s).
    pub expected: Expected,
    /// RFC 6570 level (1 to 4) the template requires.
    pub level: u8,
    /// Whether the vector is run through expansion or extraction.
    pub check: Check,
}

impl TestSpecification {
    /// Create a level-4 expansion vector with no bindings.
    ///
    /// The description defaults to the template.
    pub fn new(
        id: impl Into<String>,
        template: impl Into<String>,
        expected: impl Into<Expected>,
    ) -> Self {
        let template = template.into();
        TestSpecification {
            id: id.into(),
            description: template.clone(),
            template,
            bindings: Bindings::new(),
            expected: expected.into(),
            level: DEFAULT_LEVEL,
            check: Check::Expansion,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Bind a variable. Re-binding a name replaces the value in place.
    #[must_use]
    pub fn with_binding(mut self, name: impl Into<String>, value: impl Into<VariableValue>) -> Self {
        self.bindings.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_bindings(mut self, bindings: Bindings) -> Self {
        self.bindings = bindings;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_check(mut self, check: Check) -> Self {
        self.check = check;
        self
    }

    /// Names of the variables the template refers to, first use first.
    ///
    /// Operators, prefix modifiers (`:3`) and explode markers (`*`) are
    /// stripped. An unterminated expression ends the scan.
    pub fn template_variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                break;
            };
            let expression = &after[..close];
            let expression = expression.strip_prefix(OPERATORS).unwrap_or(expression);

            for varspec in expression.split(',') {
                let name = varspec
                    .split_once(':')
                    .map_or(varspec, |(name, _)| name)
                    .trim_end_matches('*');
                if !name.is_empty() && !names.contains(&name) {
                    names.push(name);
                }
            }
            rest = &after[close + 1..];
        }

        names
    }
}

/// Expression operators, including the ones RFC 6570 reserves.
const OPERATORS: &[char] = &['+', '#', '.', '/', ';', '?', '&', '=', ',', '!', '@', '|'];
