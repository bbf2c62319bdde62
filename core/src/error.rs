//! Common error types for Fieldgate.

use thiserror::Error;

/// Errors raised by record implementations.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record's apply routine did not recognize a staged change.
    #[error("unknown change targeting field `{field}`")]
    UnknownChange { field: String },
}

impl RecordError {
    pub fn unknown_change(field: impl Into<String>) -> Self {
        Self::UnknownChange {
            field: field.into(),
        }
    }
}

/// Result type for record operations.
pub type RecordResult<T> = Result<T, RecordError>;
