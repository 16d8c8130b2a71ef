//! Error types and handling infrastructure for the sales aggregation pipeline

use std::path::PathBuf;

/// Errors raised while discovering sales files
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("sales directory does not exist: {}", .0.display())]
    RootMissing(PathBuf),

    #[error("sales path is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("failed walking {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Errors raised while reading and summing sale records
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("failed to read sale record {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing field '{field}' in {}", .path.display())]
    MissingField { field: String, path: PathBuf },

    #[error("field '{field}' in {} is not a number", .path.display())]
    NotNumeric { field: String, path: PathBuf },
}

/// Errors raised while emitting the report
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove previous report {}: {source}", .path.display())]
    RemoveStale {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render report: {message}")]
    Render { message: String },
}

/// Main error type for pipeline operations
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PipelineError {
    pub fn invalid_config(message: String) -> Self {
        Self::InvalidConfig { message }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Discovery(err) => format!("Discovery failed: {}", err),
            Self::Aggregate(err) => format!("Aggregation failed: {}", err),
            Self::Emit(err) => format!("Report emission failed: {}", err),
            Self::InvalidConfig { message } => format!("Invalid configuration: {}", message),
            Self::Other(err) => format!("Unexpected error: {}", err),
        }
    }
}

/// Result type for discovery operations
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

/// Result type for aggregation operations
pub type AggregateResult<T> = Result<T, AggregateError>;

/// Result type for report emission operations
pub type EmitResult<T> = Result<T, EmitError>;

/// Result type for whole-pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
