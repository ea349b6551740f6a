//! Error types and exit codes for medroute
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown strategy or format)
//! - 3: Data error (unknown location, invalid or missing configuration)
//!
//! A search that finds no path is not an error; strategies return `None`.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown location, bad configuration (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur outside the search loop
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown strategy: {0} (expected: bfs, dfs, ucs, or astar)")]
    UnknownStrategy(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("unknown location: {name}")]
    UnknownLocation { name: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("configuration not found: {path:?}")]
    ConfigNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RouteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a location missing from the graph
    pub fn unknown_location(name: impl Into<String>) -> Self {
        RouteError::UnknownLocation { name: name.into() }
    }

    /// Create an error for a configuration that failed validation
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        RouteError::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UnknownFormat(_)
            | RouteError::UnknownStrategy(_)
            | RouteError::UsageError(_)
            | RouteError::InvalidValue { .. } => ExitCode::Usage,

            RouteError::UnknownLocation { .. }
            | RouteError::InvalidConfig { .. }
            | RouteError::ConfigNotFound { .. } => ExitCode::Data,

            RouteError::Io(_)
            | RouteError::Toml(_)
            | RouteError::TomlSerialize(_)
            | RouteError::Json(_)
            | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RouteError::UnknownFormat(_) => "unknown_format",
            RouteError::UnknownStrategy(_) => "unknown_strategy",
            RouteError::UsageError(_) => "usage_error",
            RouteError::InvalidValue { .. } => "invalid_value",
            RouteError::UnknownLocation { .. } => "unknown_location",
            RouteError::InvalidConfig { .. } => "invalid_config",
            RouteError::ConfigNotFound { .. } => "config_not_found",
            RouteError::Io(_) => "io_error",
            RouteError::Toml(_) | RouteError::TomlSerialize(_) => "toml_error",
            RouteError::Json(_) => "json_error",
            RouteError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for medroute operations
pub type Result<T> = std::result::Result<T, RouteError>;
