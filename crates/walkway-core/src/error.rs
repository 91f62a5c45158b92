//! Error types and exit codes for walkway
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, serialization)
//! - 2: Usage error (bad flags/args, invalid values)
//! - 3: Data error (unknown location, missing edge, unreachable destination, bad dataset)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the walkway binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing location, unreachable destination, bad dataset (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during walkway operations
#[derive(Error, Debug)]
pub enum WalkwayError {
    // Map layer
    #[error("duplicate key: {key}")]
    DuplicateKey { key: String },

    #[error("key must be set")]
    NullKey,

    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    #[error("capacity must be greater than zero")]
    InvalidCapacity,

    // Graph layer
    #[error("location not found: {key}")]
    NodeNotFound { key: String },

    #[error("no edge from {from} to {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("invalid weight {weight} for edge {from} -> {to} (weights must be finite and non-negative)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    // Engine layer
    #[error("no path exists from {from} to {to}")]
    NoPathExists { from: String, to: String },

    // Dataset loading
    #[error("dataset not found: {path:?}")]
    DatasetNotFound { path: PathBuf },

    #[error("invalid dataset {path:?}{}: {reason}", .line.map(|l| format!(" (line {})", l)).unwrap_or_default())]
    InvalidDataset {
        path: PathBuf,
        line: Option<usize>,
        reason: String,
    },

    // Usage
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl WalkwayError {
    /// Create an error for a key rejected by the map because it is already present
    pub fn duplicate_key(key: impl std::fmt::Debug) -> Self {
        WalkwayError::DuplicateKey {
            key: format!("{:?}", key),
        }
    }

    /// Create an error for a key missing from the map
    pub fn key_not_found(key: impl std::fmt::Debug) -> Self {
        WalkwayError::KeyNotFound {
            key: format!("{:?}", key),
        }
    }

    /// Create an error for a location missing from the graph
    pub fn node_not_found(key: impl std::fmt::Debug) -> Self {
        WalkwayError::NodeNotFound {
            key: format!("{:?}", key),
        }
    }

    /// Create an error for a missing directed edge
    pub fn edge_not_found(from: impl std::fmt::Debug, to: impl std::fmt::Debug) -> Self {
        WalkwayError::EdgeNotFound {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Create an error for an unreachable destination
    pub fn no_path(from: impl std::fmt::Debug, to: impl std::fmt::Debug) -> Self {
        WalkwayError::NoPathExists {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Create an error for a rejected edge weight
    pub fn invalid_weight(from: impl std::fmt::Debug, to: impl std::fmt::Debug, weight: f64) -> Self {
        WalkwayError::InvalidWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight,
        }
    }

    /// Create an error for a malformed dataset
    pub fn invalid_dataset(
        path: impl Into<PathBuf>,
        line: Option<usize>,
        reason: impl Into<String>,
    ) -> Self {
        WalkwayError::InvalidDataset {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WalkwayError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WalkwayError::UsageError(_)
            | WalkwayError::InvalidValue { .. }
            | WalkwayError::InvalidWeight { .. }
            | WalkwayError::InvalidCapacity => ExitCode::Usage,

            WalkwayError::DuplicateKey { .. }
            | WalkwayError::NullKey
            | WalkwayError::KeyNotFound { .. }
            | WalkwayError::NodeNotFound { .. }
            | WalkwayError::EdgeNotFound { .. }
            | WalkwayError::NoPathExists { .. }
            | WalkwayError::DatasetNotFound { .. }
            | WalkwayError::InvalidDataset { .. } => ExitCode::Data,

            WalkwayError::Io(_)
            | WalkwayError::Json(_)
            | WalkwayError::Toml(_)
            | WalkwayError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WalkwayError::DuplicateKey { .. } => "duplicate_key",
            WalkwayError::NullKey => "null_key",
            WalkwayError::KeyNotFound { .. } => "key_not_found",
            WalkwayError::InvalidCapacity => "invalid_capacity",
            WalkwayError::NodeNotFound { .. } => "node_not_found",
            WalkwayError::EdgeNotFound { .. } => "edge_not_found",
            WalkwayError::InvalidWeight { .. } => "invalid_weight",
            WalkwayError::NoPathExists { .. } => "no_path_exists",
            WalkwayError::DatasetNotFound { .. } => "dataset_not_found",
            WalkwayError::InvalidDataset { .. } => "invalid_dataset",
            WalkwayError::UsageError(_) => "usage_error",
            WalkwayError::InvalidValue { .. } => "invalid_value",
            WalkwayError::Io(_) => "io_error",
            WalkwayError::Json(_) => "json_error",
            WalkwayError::Toml(_) => "toml_error",
            WalkwayError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for walkway operations
pub type Result<T> = std::result::Result<T, WalkwayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_layer() {
        assert_eq!(WalkwayError::NullKey.exit_code(), ExitCode::Data);
        assert_eq!(
            WalkwayError::no_path("A", "B").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            WalkwayError::invalid_weight("A", "B", -1.0).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            WalkwayError::Other("boom".to_string()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = WalkwayError::node_not_found("Library Mall");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "node_not_found");
        assert_eq!(
            json["error"]["message"],
            "location not found: \"Library Mall\""
        );
    }

    #[test]
    fn test_invalid_dataset_message_includes_line() {
        let err = WalkwayError::invalid_dataset("campus.dot", Some(4), "missing weight");
        assert_eq!(
            err.to_string(),
            "invalid dataset \"campus.dot\" (line 4): missing weight"
        );

        let err = WalkwayError::invalid_dataset("campus.txt", None, "expected a .dot file");
        assert_eq!(
            err.to_string(),
            "invalid dataset \"campus.txt\": expected a .dot file"
        );
    }
}
