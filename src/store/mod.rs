//! # Mountain Store
//!
//! The authoritative in-memory collection of mountains.
//!
//! One `RwLock` guards the collection and the id counter together: every
//! mutating operation runs in a single write-locked critical section, every
//! query in a single read-locked one. Callers never see the underlying Vec.

mod errors;
mod filter;
mod mountain_store;

pub use errors::{StoreError, StoreResult};
pub use filter::MountainQuery;
pub use mountain_store::MountainStore;
