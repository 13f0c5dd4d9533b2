//! Error types for wordlens-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration parsed but holds values the engine cannot work with.
    #[error("invalid configuration value for `{key}`: {reason}")]
    Invalid {
        /// Dotted key of the offending setting.
        key: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while running an analysis.
///
/// Degenerate input is never an error: empty text produces zero and neutral
/// values. These variants describe runs that could not produce a result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The analysis panicked and the panic was caught at the scheduler boundary.
    #[error("analysis panicked: {0}")]
    Panicked(String),

    /// An analyzer reported a failure of its own.
    #[error("analysis failed: {0}")]
    Failed(String),

    /// The live analyzer task is gone, so no further runs can be scheduled.
    #[error("live analyzer has shut down")]
    Closed,
}

/// Result type alias using [`AnalysisError`].
pub type EngineResult<T> = Result<T, AnalysisError>;

/// Errors that can occur when applying a text transform.
#[derive(Error, Debug)]
pub enum TransformError {
    /// The text is not valid JSON and cannot be pretty-printed.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The find pattern is not a valid regular expression.
    #[error("invalid find pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
