//! Fieldgate Change Proxy
//!
//! Transactional field-update guard for a single mutable record.
//!
//! Responsibilities:
//! - Track pending field changes (change buffer)
//! - Snapshot the record at bind time
//! - Apply the whole staged batch in staging order on commit
//! - Reject duplicate field targets and restore the snapshot

mod buffer;
mod error;
mod proxy;

pub use buffer::ChangeBuffer;
pub use error::{ProxyError, ProxyResult};
pub use proxy::{ChangeProxy, ProxyState};
