//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown node, unreadable graph, missing preset)

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
    /// Data error - unknown node, bad graph file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphwalk operations
#[derive(Error, Debug)]
pub enum GraphwalkError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("invalid graph file {path:?}: {reason}")]
    InvalidGraphFile { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl GraphwalkError {
    /// Create an error for a node missing from the graph's key set
    pub fn node_not_found(id: impl std::fmt::Display) -> Self {
        GraphwalkError::NodeNotFound { id: id.to_string() }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphwalkError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphwalkError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        GraphwalkError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        GraphwalkError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphwalkError::UnknownFormat(_)
            | GraphwalkError::DuplicateFormat
            | GraphwalkError::UsageError(_)
            | GraphwalkError::InvalidValue { .. }
            | GraphwalkError::Unsupported { .. } => ExitCode::Usage,

            GraphwalkError::NodeNotFound { .. }
            | GraphwalkError::NotFound { .. }
            | GraphwalkError::InvalidGraphFile { .. } => ExitCode::Data,

            GraphwalkError::Io(_)
            | GraphwalkError::Yaml(_)
            | GraphwalkError::Json(_)
            | GraphwalkError::Toml(_)
            | GraphwalkError::FailedOperationWithTarget { .. }
            | GraphwalkError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphwalkError::UnknownFormat(_) => "unknown_format",
            GraphwalkError::DuplicateFormat => "duplicate_format",
            GraphwalkError::UsageError(_) => "usage_error",
            GraphwalkError::InvalidValue { .. } => "invalid_value",
            GraphwalkError::Unsupported { .. } => "unsupported",
            GraphwalkError::NodeNotFound { .. } => "node_not_found",
            GraphwalkError::NotFound { .. } => "not_found",
            GraphwalkError::InvalidGraphFile { .. } => "invalid_graph_file",
            GraphwalkError::Io(_) => "io_error",
            GraphwalkError::Yaml(_) => "yaml_error",
            GraphwalkError::Json(_) => "json_error",
            GraphwalkError::Toml(_) => "toml_error",
            GraphwalkError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            GraphwalkError::Other(_) => "other",
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

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphwalkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_not_found_is_data_error() {
        let err = GraphwalkError::node_not_found("Z");
        assert_eq!(err.exit_code(), ExitCode::Data);
        assert_eq!(err.to_string(), "node not found: Z");
    }

    #[test]
    fn test_usage_errors_map_to_usage_code() {
        assert_eq!(
            GraphwalkError::UnknownFormat("xml".to_string()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            GraphwalkError::invalid_value("pair", "A-B").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            GraphwalkError::unsupported("graph file extension", "csv", "toml, json, yaml")
                .exit_code(),
            ExitCode::Usage
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = GraphwalkError::node_not_found("Q");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "node_not_found");
        assert_eq!(json["error"]["message"], "node not found: Q");
    }

    #[test]
    fn test_exit_code_into_i32() {
        let code: i32 = ExitCode::Usage.into();
        assert_eq!(code, 2);
    }
}
