//! Proxy error types.

use std::fmt;

use fieldgate_core::RecordError;
use thiserror::Error;

/// Errors surfaced by a commit pass.
#[derive(Debug, Error)]
pub enum ProxyError<F>
where
    F: fmt::Debug + fmt::Display,
{
    /// A second change targeted a field already applied in this pass.
    /// The record has been restored from the bind-time snapshot.
    #[error("duplicate change detected for field `{field}`")]
    DuplicateFieldChange { field: F },

    /// A record implementation did not recognize a staged change.
    /// This marks an internal invariant violation; rollback is
    /// best-effort only.
    #[error(transparent)]
    UnknownChange(#[from] RecordError),
}

/// Result type for proxy operations.
pub type ProxyResult<T, F> = Result<T, ProxyError<F>>;
