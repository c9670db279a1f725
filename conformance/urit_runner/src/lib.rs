//! Host runner for URI template conformance registries.
//!
//! This crate provides:
//! - Suite setup: fixture files into a frozen registry ([`load_suite`])
//! - Configuration: filtering, level gating and parallelism ([`TestRunnerConfig`])
//! - Test execution: expansion and extraction, one result per registered identity ([`TestRunner`])
//! - Result tracking: pass/fail/error/skip counts and exit codes ([`TestSummary`])
//! - Reporting: a plain-text summary ([`render_summary`])
//! - Logging: opt-in tracing output ([`init_tracing`])

mod config;
mod report;
mod result;
mod runner;
mod setup;
mod tracing_setup;

pub use config::TestRunnerConfig;
pub use report::render_summary;
pub use result::{TestOutcome, TestResult, TestSummary};
pub use runner::TestRunner;
pub use setup::{load_suite, SetupError};
pub use tracing_setup::{init_tracing, LOG_ENV};
