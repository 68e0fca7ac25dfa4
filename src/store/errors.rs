//! Store error types.
//!
//! All store failures are outcome values; the store never panics on a
//! failure path and never leaves the collection partially mutated.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An insert was called with no candidates
    #[error("batch must contain at least one mountain")]
    EmptyBatch,

    /// A candidate in the batch already exists in the store
    #[error("batch contains mountains already stored")]
    Conflict,

    /// An update payload failed validation
    #[error("mountain failed validation")]
    InvalidMountain,

    /// No stored mountain has the requested id
    #[error("no mountain with id {0}")]
    NotFound(u64),

    /// A panicking writer poisoned the store lock
    #[error("store lock poisoned")]
    LockPoisoned,
}
