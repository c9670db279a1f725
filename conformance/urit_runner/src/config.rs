//! Runner configuration.

/// Highest RFC 6570 level a vector can declare.
const MAX_LEVEL: u8 = 4;

/// Default ceiling for extraction vectors.
const MAX_EXTRACTION_LEVEL: u8 = 3;

/// Configuration for the test runner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestRunnerConfig {
    /// Only run identities (or source identifiers) containing this substring.
    pub filter: Option<String>,
    /// Run vectors in parallel.
    pub parallel: bool,
    /// Report passing and skipped vectors too.
    pub verbose: bool,
    /// Highest level the expander under test supports; expansion vectors
    /// above it are reported as skipped.
    pub max_level: u8,
    /// Highest level the extractor under test supports; extraction vectors
    /// above it are reported as skipped.
    pub max_extraction_level: u8,
}

impl Default for TestRunnerConfig {
    fn default() -> Self {
        TestRunnerConfig {
            filter: None,
            parallel: true,
            verbose: false,
            max_level: MAX_LEVEL,
            max_extraction_level: MAX_EXTRACTION_LEVEL,
        }
    }
}

impl TestRunnerConfig {
    /// Defaults overlaid with `URIT_FILTER`, `URIT_PARALLEL`, `URIT_VERBOSE`,
    /// `URIT_MAX_LEVEL` and `URIT_MAX_EXTRACTION_LEVEL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for the `URIT_*` keys.
    ///
    /// Unparseable values keep the default and log a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = TestRunnerConfig::default();

        if let Some(filter) = lookup("URIT_FILTER").filter(|f| !f.is_empty()) {
            config.filter = Some(filter);
        }
        if let Some(value) = lookup("URIT_PARALLEL") {
            config.parallel = parse_flag("URIT_PARALLEL", &value).unwrap_or(config.parallel);
        }
        if let Some(value) = lookup("URIT_VERBOSE") {
            config.verbose = parse_flag("URIT_VERBOSE", &value).unwrap_or(config.verbose);
        }
        if let Some(value) = lookup("URIT_MAX_LEVEL") {
            config.max_level = parse_level("URIT_MAX_LEVEL", &value).unwrap_or(config.max_level);
        }
        if let Some(value) = lookup("URIT_MAX_EXTRACTION_LEVEL") {
            config.max_extraction_level = parse_level("URIT_MAX_EXTRACTION_LEVEL", &value)
                .unwrap_or(config.max_extraction_level);
        }

        config
    }
}

fn parse_level(key: &str, value: &str) -> Option<u8> {
    match value.trim().parse::<u8>() {
        Ok(level) if (1..=MAX_LEVEL).contains(&level) => Some(level),
        _ => {
            tracing::warn!(key, value, "level must be 1 to 4; keeping default");
            None
        }
    }
}

fn parse_flag(key: &str, value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            tracing::warn!(key, value, "unrecognised flag value; keeping default");
            None
        }
    }
}
