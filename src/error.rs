//! Custom error types for fltcli
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The sheet exists but its top-level value is not an array
    #[error("File does not contain a JSON array: {}", path.display())]
    StorageMalformed { path: PathBuf },

    /// A stored record is missing a field or has one of the wrong type
    #[error("Malformed transaction record at index {index}: {message}")]
    RecordMalformed { index: usize, message: String },

    /// The sheet could not be written
    #[error("File-opening failure: {}: {message}", path.display())]
    WriteFailure { path: PathBuf, message: String },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A modify request named a field that cannot be changed
    #[error("Transaction field not found: {0}")]
    UnknownField(String),

    /// Unrecognized command
    #[error("Syntax error: unknown command '{0}', check your inputs")]
    Syntax(String),

    /// An argument could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LedgerError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Errors after which a command carries on with an empty record set
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::StorageMalformed { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
