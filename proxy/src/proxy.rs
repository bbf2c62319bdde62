//! The change proxy: bind, stage, commit, rollback.

use std::collections::HashSet;

use fieldgate_core::{FieldChange, Record};

use crate::buffer::ChangeBuffer;
use crate::error::{ProxyError, ProxyResult};

/// Proxy state, tracking the outcome of the most recent commit pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyState {
    /// Accepting reads and staged changes.
    Staging,
    /// The most recent commit pass applied every staged change.
    Committed,
    /// The most recent commit pass aborted.
    Aborted,
}

/// Transactional guard over one mutable record.
///
/// The proxy holds exclusive access to the record for its lifetime, plus a
/// value copy (the snapshot) taken at bind time. Staged changes never touch
/// the record; [`ChangeProxy::apply_changes`] either applies the whole
/// batch in staging order or restores the snapshot and reports why.
///
/// The proxy is reusable: each commit pass drains whatever is currently
/// staged and checks duplicate field targets against a fresh applied set,
/// so a caller can stage and commit again after a pass completes. The
/// snapshot is captured once, at bind time, and an aborted pass always
/// restores the bind-time state.
pub struct ChangeProxy<'r, R: Record> {
    /// The live record under guard.
    record: &'r mut R,
    /// Value copy taken at bind time. Never mutated; rollback target.
    snapshot: R,
    /// Staged changes awaiting commit.
    buffer: ChangeBuffer<R::Change>,
    /// Outcome of the most recent commit pass.
    state: ProxyState,
}

impl<'r, R: Record> ChangeProxy<'r, R> {
    /// Bind a proxy to a record, capturing the rollback snapshot.
    pub fn bind(record: &'r mut R) -> Self {
        let snapshot = record.clone();
        Self {
            record,
            snapshot,
            buffer: ChangeBuffer::new(),
            state: ProxyState::Staging,
        }
    }

    /// The record as it currently stands. Staged changes are not visible
    /// here until they are committed.
    pub fn record(&self) -> &R {
        self.record
    }

    /// The bind-time snapshot.
    pub fn snapshot(&self) -> &R {
        &self.snapshot
    }

    /// Current proxy state.
    pub fn state(&self) -> ProxyState {
        self.state
    }

    // ========== Staging ==========

    /// Stage a change without touching the record.
    ///
    /// Duplicate field targets are accepted here; detection is deferred to
    /// [`ChangeProxy::apply_changes`].
    pub fn stage(&mut self, change: R::Change) {
        self.buffer.push(change);
        self.state = ProxyState::Staging;
    }

    /// Changes staged so far, in staging order.
    pub fn staged(&self) -> &[R::Change] {
        self.buffer.as_slice()
    }

    /// Number of staged changes.
    pub fn staged_len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if any changes are staged.
    pub fn has_staged(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Drop every staged change without applying any of them.
    pub fn discard(&mut self) {
        self.buffer.clear();
        self.state = ProxyState::Staging;
    }

    // ========== Commit ==========

    /// Apply every staged change in staging order, or none of them.
    ///
    /// A second change for a field already applied in this pass aborts the
    /// pass: the record is overwritten from the snapshot, the remaining
    /// queued changes are dropped, and
    /// [`ProxyError::DuplicateFieldChange`] identifies the offending
    /// field. A change the record refuses to apply aborts with
    /// [`ProxyError::UnknownChange`] and no rollback guarantee.
    ///
    /// An empty queue commits as a no-op.
    pub fn apply_changes(&mut self) -> ProxyResult<(), R::Field> {
        let mut applied: HashSet<R::Field> = HashSet::new();

        for change in self.buffer.drain() {
            let field = change.field();

            if !applied.insert(field) {
                self.rollback();
                self.state = ProxyState::Aborted;
                return Err(ProxyError::DuplicateFieldChange { field });
            }

            if let Err(e) = self.record.apply(change) {
                self.state = ProxyState::Aborted;
                return Err(ProxyError::UnknownChange(e));
            }
        }

        self.state = ProxyState::Committed;
        Ok(())
    }

    /// Overwrite the record from the bind-time snapshot, field for field.
    fn rollback(&mut self) {
        *self.record = self.snapshot.clone();
    }
}
