//! Error types for carrental.
//!
//! This module defines all error types used throughout the carrental crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for carrental operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// A record file could not be opened, read, written, renamed or removed.
    #[error("failed to {operation} {path}: {source}")]
    Store {
        /// What the store was doing when it failed.
        operation: &'static str,
        /// Path to the record file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// No record matched the lookup.
    #[error("no matching {entity} record")]
    NotFound {
        /// Kind of record that was searched for.
        entity: &'static str,
    },

    // === Domain Errors ===
    /// A rental date was malformed or the range was inverted.
    #[error("invalid date '{input}': {reason}")]
    Date {
        /// The offending input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Input was rejected before anything was persisted.
    #[error("{0}")]
    Validation(String),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Console Errors ===
    /// The console input stream was closed.
    #[error("input closed")]
    InputClosed,

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for carrental operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a store error for the given operation and path.
    #[must_use]
    pub fn store(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Store {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Create a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a date error.
    #[must_use]
    pub fn date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Date {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error means a lookup matched nothing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error was raised by input validation.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error is a date parsing or range error.
    #[must_use]
    pub fn is_date(&self) -> bool {
        matches!(self, Self::Date { .. })
    }
}
