//! Error types and exit codes for graphkit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, serialization, algorithm preconditions)
//! - 2: Usage error (bad flags/args, invalid values)
//! - 3: Data error (unknown vertex or edge, malformed input, stale results)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the graphkit binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex, malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: String },

    #[error("vertex already exists: {vertex}")]
    AlreadyExists { vertex: String },

    #[error("edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("{what} not computed")]
    NotComputed { what: String },

    #[error("{what} is stale: the graph changed after it was computed")]
    StaleResult { what: String },

    #[error(
        "parse error{} at line {line}: {reason}",
        path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default()
    )]
    Parse {
        path: Option<PathBuf>,
        line: usize,
        reason: String,
    },

    // Generic failures (exit code 1)
    #[error("negative edge weight {weight} on {from} -> {to} (dijkstra requires non-negative weights)")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("negative-weight cycle detected by {algorithm}")]
    NegativeCycle { algorithm: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperation {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a vertex that is not in the graph
    pub fn vertex_not_found(vertex: impl std::fmt::Debug) -> Self {
        GraphError::VertexNotFound {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a vertex whose content is already present
    pub fn already_exists(vertex: impl std::fmt::Debug) -> Self {
        GraphError::AlreadyExists {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a missing edge
    pub fn edge_not_found(from: impl std::fmt::Debug, to: impl std::fmt::Debug) -> Self {
        GraphError::EdgeNotFound {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Create an error for an edge weight Dijkstra cannot handle
    pub fn negative_weight(
        from: impl std::fmt::Debug,
        to: impl std::fmt::Debug,
        weight: f64,
    ) -> Self {
        GraphError::NegativeWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight,
        }
    }

    /// Create an error for a detected negative-weight cycle
    pub fn negative_cycle(algorithm: &str) -> Self {
        GraphError::NegativeCycle {
            algorithm: algorithm.to_string(),
        }
    }

    /// Create an error for a result that was never computed
    pub fn not_computed(what: &str) -> Self {
        GraphError::NotComputed {
            what: what.to_string(),
        }
    }

    /// Create an error for a result invalidated by a later mutation
    pub fn stale(what: &str) -> Self {
        GraphError::StaleResult {
            what: what.to_string(),
        }
    }

    /// Create an error for a malformed input line
    pub fn parse(path: Option<PathBuf>, line: usize, reason: impl std::fmt::Display) -> Self {
        GraphError::Parse {
            path,
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphError::FailedOperation {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::VertexNotFound { .. }
            | GraphError::AlreadyExists { .. }
            | GraphError::EdgeNotFound { .. }
            | GraphError::NotComputed { .. }
            | GraphError::StaleResult { .. }
            | GraphError::Parse { .. } => ExitCode::Data,

            GraphError::NegativeWeight { .. }
            | GraphError::NegativeCycle { .. }
            | GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::FailedOperation { .. }
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::VertexNotFound { .. } => "vertex_not_found",
            GraphError::AlreadyExists { .. } => "already_exists",
            GraphError::EdgeNotFound { .. } => "edge_not_found",
            GraphError::NotComputed { .. } => "not_computed",
            GraphError::StaleResult { .. } => "stale_result",
            GraphError::Parse { .. } => "parse_error",
            GraphError::NegativeWeight { .. } => "negative_weight",
            GraphError::NegativeCycle { .. } => "negative_cycle",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::FailedOperation { .. } => "failed_operation",
            GraphError::Other(_) => "other",
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

/// Result type alias for graphkit operations
pub type Result<T> = std::result::Result<T, GraphError>;
