//! Decoding of uritemplate-test JSON suite files.
//!
//! A file is an object of named suites. Each suite shares one set of
//! variables across its cases. Every case becomes an expansion vector
//! `"{fixture} {suite} Case {n} Expansion"` (1-based `n`) followed by an
//! extraction vector `"{fixture} {suite} Case {n} Extraction"`. Cases that
//! expect a rejection have nothing to extract from and get no extraction
//! vector.
//! Top-level entries that are not objects are skipped, matching how the
//! upstream corpus annotates files.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::check::Check;
use crate::error::VectorError;
use crate::expected::Expected;
use crate::spec::TestSpecification;
use crate::value::{Bindings, VariableValue};

/// Level assumed when a suite does not declare one.
pub const DEFAULT_LEVEL: u8 = 4;

#[derive(Deserialize)]
struct RawSuite {
    #[serde(default)]
    level: Option<i64>,
    variables: Map<String, Value>,
    testcases: Vec<Value>,
}

/// Decode every suite in `json`, in document order.
///
/// `fixture` names the file in identifiers and error messages.
pub fn decode_suites(fixture: &str, json: &str) -> Result<Vec<TestSpecification>, VectorError> {
    let entries: IndexMap<String, Value> =
        serde_json::from_str(json).map_err(|source| VectorError::Json {
            fixture: fixture.to_string(),
            source,
        })?;

    let mut specs = Vec::new();
    for (name, value) in entries {
        if !value.is_object() {
            tracing::debug!(fixture, suite = %name, "skipping non-suite entry");
            continue;
        }

        let raw = RawSuite::deserialize(value).map_err(|source| VectorError::Json {
            fixture: fixture.to_string(),
            source,
        })?;
        let decoder = SuiteDecoder {
            fixture,
            suite: &name,
        };
        let cases = decoder.decode(raw)?;
        tracing::debug!(fixture, suite = %name, cases = cases.len(), "decoded suite");
        specs.extend(cases);
    }

    Ok(specs)
}

/// Read and decode one fixture file.
///
/// The file stem becomes the fixture name (`spec-examples.json` produces
/// identifiers starting with `spec-examples`).
pub fn load_fixture(path: &Path) -> Result<Vec<TestSpecification>, VectorError> {
    let content = std::fs::read_to_string(path).map_err(|source| VectorError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let fixture = path
        .file_stem()
        .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned());

    decode_suites(&fixture, &content)
}

struct SuiteDecoder<'a> {
    fixture: &'a str,
    suite: &'a str,
}

impl SuiteDecoder<'_> {
    fn decode(&self, raw: RawSuite) -> Result<Vec<TestSpecification>, VectorError> {
        let level = self.level(raw.level)?;
        let bindings = self.bindings(raw.variables)?;

        let mut specs = Vec::with_capacity(raw.testcases.len() * 2);
        for (index, case) in raw.testcases.into_iter().enumerate() {
            let number = index + 1;
            let (template, expected) =
                decode_case(case).map_err(|reason| VectorError::MalformedCase {
                    fixture: self.fixture.to_string(),
                    suite: self.suite.to_string(),
                    case: number,
                    reason,
                })?;

            let expansion = TestSpecification {
                id: self.case_id(number, Check::Expansion),
                description: format!("{}: {template}", self.suite),
                template,
                bindings: bindings.clone(),
                expected,
                level,
                check: Check::Expansion,
            };
            let extraction = (!expansion.expected.is_rejection()).then(|| TestSpecification {
                id: self.case_id(number, Check::Extraction),
                check: Check::Extraction,
                ..expansion.clone()
            });

            specs.push(expansion);
            specs.extend(extraction);
        }

        Ok(specs)
    }

    fn case_id(&self, number: usize, check: Check) -> String {
        format!("{} {} Case {number} {}", self.fixture, self.suite, check.suffix())
    }

    fn level(&self, declared: Option<i64>) -> Result<u8, VectorError> {
        let Some(level) = declared else {
            return Ok(DEFAULT_LEVEL);
        };

        u8::try_from(level)
            .ok()
            .filter(|l| (1..=4).contains(l))
            .ok_or_else(|| VectorError::InvalidLevel {
                fixture: self.fixture.to_string(),
                suite: self.suite.to_string(),
                level,
            })
    }

    fn bindings(&self, variables: Map<String, Value>) -> Result<Bindings, VectorError> {
        variables
            .into_iter()
            .map(|(name, value)| match decode_variable(value) {
                Ok(value) => Ok((name, value)),
                Err(reason) => Err(VectorError::MalformedVariable {
                    fixture: self.fixture.to_string(),
                    suite: self.suite.to_string(),
                    name,
                    reason,
                }),
            })
            .collect()
    }
}

/// Strings pass through; numbers and booleans are stringified.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn decode_variable(value: Value) -> Result<VariableValue, String> {
    match value {
        Value::Null => Ok(VariableValue::Undefined),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                scalar(item).ok_or_else(|| format!("list items must be scalars, found `{item}`"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(VariableValue::List),
        Value::Object(pairs) => pairs
            .iter()
            .map(|(k, v)| {
                scalar(v)
                    .map(|v| (k.clone(), v))
                    .ok_or_else(|| format!("map value for `{k}` must be a scalar, found `{v}`"))
            })
            .collect::<Result<IndexMap<_, _>, _>>()
            .map(VariableValue::Map),
        other => scalar(&other)
            .map(VariableValue::Scalar)
            .ok_or_else(|| format!("unsupported value `{other}`")),
    }
}

fn decode_case(case: Value) -> Result<(String, Expected), String> {
    let Value::Array(mut parts) = case else {
        return Err(format!("expected a [template, expected] pair, found `{case}`"));
    };
    if parts.len() != 2 {
        return Err(format!(
            "expected a [template, expected] pair, found {} elements",
            parts.len()
        ));
    }

    let expected = parts.pop().unwrap_or(Value::Null);
    let template = match parts.pop() {
        Some(Value::String(template)) => template,
        other => {
            return Err(format!(
                "template must be a string, found `{}`",
                other.unwrap_or(Value::Null)
            ))
        }
    };

    let expected = match expected {
        Value::String(s) => Expected::One(s),
        Value::Bool(false) => Expected::Rejected,
        Value::Array(alternatives) if !alternatives.is_empty() => {
            let alternatives = alternatives
                .into_iter()
                .map(|alt| match alt {
                    Value::String(s) => Ok(s),
                    other => Err(format!("alternatives must be strings, found `{other}`")),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Expected::AnyOf(alternatives)
        }
        other => return Err(format!("unsupported expectation `{other}`")),
    };

    Ok((template, expected))
}
