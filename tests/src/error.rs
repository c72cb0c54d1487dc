//! Error types for the scenario framework.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur when running scenarios.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Failed to read or write a file.
    #[error("failed to access file '{path}': {source}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse a fixture file.
    #[error("failed to parse fixture '{path}': {message}")]
    FixtureParse { path: PathBuf, message: String },

    /// Missing fixture.
    #[error("fixture not specified for scenario '{scenario}'")]
    MissingFixture { scenario: String },

    /// Loading the materialized codegraph failed.
    #[error("failed to load codegraph: {0}")]
    Load(#[from] codegraph_core::CodegraphError),

    /// An expectation did not hold.
    #[error("expectation failed for '{check}': {message}")]
    ExpectationFailed { check: String, message: String },
}

impl ScenarioError {
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }

    pub fn fixture_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FixtureParse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn missing_fixture(scenario: impl Into<String>) -> Self {
        Self::MissingFixture {
            scenario: scenario.into(),
        }
    }

    pub fn expectation_failed(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExpectationFailed {
            check: check.into(),
            message: message.into(),
        }
    }
}
