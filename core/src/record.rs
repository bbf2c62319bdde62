//! The record seam: field identity, staged changes, and change application.
//!
//! A record is any clonable value with a fixed, known set of named fields.
//! Each record type declares an enumerated field tag (its field set) and a
//! closed change enum with one variant per field. The proxy never touches
//! record fields directly; every mutation flows through [`Record::apply`].

use std::fmt;
use std::hash::Hash;

use crate::error::RecordResult;

/// A staged instruction to set one field of a record to one value.
///
/// Implementations are closed enums with one variant per field. A change
/// owns its payload and carries no reference back to the record it targets.
pub trait FieldChange {
    /// Enumerated identity of the fields this change type can target.
    type Field: Copy + Eq + Hash + fmt::Debug + fmt::Display;

    /// The field this change targets.
    fn field(&self) -> Self::Field;
}

/// A mutable entity whose fields are updated only through staged changes.
///
/// `Clone` is what makes rollback possible: the proxy stores a full value
/// copy of the record at bind time and overwrites the live record from it
/// when a commit pass aborts.
pub trait Record: Clone {
    /// Field identity tags for this record.
    type Field: Copy + Eq + Hash + fmt::Debug + fmt::Display;

    /// The closed set of changes that can target this record.
    type Change: FieldChange<Field = Self::Field>;

    /// Apply a single change to this record.
    ///
    /// A correct implementation matches `Self::Change` exhaustively and
    /// never fails. The fallible return keeps the unknown-change case an
    /// explicit check rather than an implicit impossibility: an
    /// implementation that refuses a change must report it, never drop it.
    fn apply(&mut self, change: Self::Change) -> RecordResult<()>;
}
