//! Result and error types for Faro.

use std::path::PathBuf;

use thiserror::Error;

use crate::request::ReportFormat;

/// Result type for Faro operations
pub type FaroResult<T> = Result<T, FaroError>;

/// Errors that can occur in Faro
#[derive(Debug, Error)]
pub enum FaroError {
    /// The auditing engine produced no result
    #[error("audit engine produced no result: {message}")]
    EngineFailure {
        /// Error message
        message: String,
    },

    /// Writing one report artifact failed
    #[error("failed to write {format} report to {}: {source}", .destination.display())]
    ArtifactWriteFailure {
        /// Format whose write failed
        format: ReportFormat,
        /// Destination that could not be written
        destination: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Engine report did not match the consumed shape
    #[error("malformed engine report: {message}")]
    ReportShape {
        /// Error message
        message: String,
    },

    /// Page error
    #[error("page error: {message}")]
    PageError {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("navigation to {url} failed: {message}")]
    NavigationError {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FaroError {
    /// Engine failure with the given message
    #[must_use]
    pub fn engine(message: impl Into<String>) -> Self {
        Self::EngineFailure {
            message: message.into(),
        }
    }

    /// Report-shape failure with the given message
    #[must_use]
    pub fn shape(message: impl Into<String>) -> Self {
        Self::ReportShape {
            message: message.into(),
        }
    }
}
