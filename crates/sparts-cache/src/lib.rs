//! Local cache layer for the sparts ledger client
//!
//! The cache is a read-through mirror of the remote ledger: never
//! authoritative, populated only by explicit synchronize operations, and
//! invalidated only by the next full refresh. It also owns the alias index —
//! the locally-chosen, human-friendly labels mapped to canonical UUIDs.

pub mod error;
pub mod memory;
pub mod store;

pub use error::{CacheError, CacheResult};
pub use memory::MemoryPartStore;
pub use store::PartStore;
