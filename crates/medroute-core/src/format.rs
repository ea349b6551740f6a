//! Output format handling for medroute
//!
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// Output format for medroute commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(RouteError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Build the horizontal rule used around report sections
pub fn rule(width: usize) -> String {
    "=".repeat(width)
}

/// Join a route into `A -> B -> C` form
pub fn join_path<T: fmt::Display>(path: &[T]) -> String {
    path.iter()
        .map(|step| step.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!(
            "human".parse::<OutputFormat>().unwrap(),
            OutputFormat::Human
        );
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format() {
        let err = "records".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, RouteError::UnknownFormat(_)));
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path(&["A", "B", "C"]), "A -> B -> C");
        assert_eq!(join_path(&["A"]), "A");
        assert_eq!(join_path::<&str>(&[]), "");
    }
}
