//! Error types for trailog operations.
//!
//! This module defines [`TrailogError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `InvalidMetric` and `NotFound` are the recoverable domain errors the
//!   store surfaces; the caller shows a message and lets the user retry
//! - `Persistence` is reported after the in-memory mutation has been kept
//! - Use `anyhow::Error` (via `TrailogError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for trailog operations.
#[derive(Debug, Error)]
pub enum TrailogError {
    /// A numeric input was missing, non-finite, or out of its allowed range.
    #[error("Invalid {field}: {value} (must be {expected})")]
    InvalidMetric {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// No workout with this id exists in the store.
    #[error("Workout not found: {id}")]
    NotFound { id: String },

    /// The durable key-value slot rejected a read or write.
    #[error("Failed to persist '{key}': {message}")]
    Persistence { key: String, message: String },

    /// Workout kind string was neither `running` nor `cycling`.
    #[error("Unknown workout type: {value} (expected running or cycling)")]
    UnknownKind { value: String },

    /// Sort key string was not one of the supported keys.
    #[error("Unknown sort key: {value} (expected type, distance or duration)")]
    UnknownSortKey { value: String },

    /// Configuration file not found at an explicitly given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrailogError {
    /// Build a persistence error for the given storage key.
    pub fn persistence(key: &str, message: impl Into<String>) -> Self {
        Self::Persistence {
            key: key.to_string(),
            message: message.into(),
        }
    }

    /// Whether this error left the store's state untouched.
    ///
    /// Persistence failures keep the in-memory mutation, everything else
    /// is rejected before anything changes.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidMetric { .. }
                | Self::NotFound { .. }
                | Self::UnknownKind { .. }
                | Self::UnknownSortKey { .. }
        )
    }
}

/// Result type alias for trailog operations.
pub type Result<T> = std::result::Result<T, TrailogError>;
