//! Fieldgate Core Types
//!
//! This crate provides the foundational types used throughout Fieldgate:
//! - Field identity tags (enumerated per-record field sets)
//! - Staged changes (one closed enum variant per field)
//! - The `Record` seam through which changes are applied
//! - Common error types

mod error;
mod record;

pub use error::{RecordError, RecordResult};
pub use record::{FieldChange, Record};
