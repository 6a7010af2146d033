//! Part store trait abstraction
//!
//! This module defines the [`PartStore`] trait that abstracts the local
//! mirror, allowing different implementations (in-memory, file-backed, etc.)
//! behind the same seam the sync and presentation layers consume.

use sparts_core::Part;
use uuid::Uuid;

use crate::error::CacheResult;

/// Local mirror of the ledger's parts plus the alias index.
///
/// Parts are keyed by their ledger-assigned UUID and replaced wholesale on
/// each synchronize. Aliases are local facts and survive a refresh.
pub trait PartStore: Send + Sync {
    /// Last-known snapshot of a part, if mirrored
    fn part(&self, uuid: &Uuid) -> CacheResult<Option<Part>>;

    /// All mirrored parts. An empty result means nothing is cached, which is
    /// not a failure; callers should suggest synchronizing.
    fn all_parts(&self) -> CacheResult<Vec<Part>>;

    /// Atomically replace the whole mirror with a fresh ledger snapshot.
    /// Returns the number of parts now cached. Aliases are untouched.
    fn replace_all(&self, parts: Vec<Part>) -> CacheResult<usize>;

    /// Resolve a locally-chosen alias to its UUID. A miss is `None`, never
    /// an error: callers must treat it as "no such alias".
    fn uuid_for_alias(&self, alias: &str) -> CacheResult<Option<Uuid>>;

    /// Reverse lookup used by listings: the alias registered for a UUID
    fn alias_for_uuid(&self, uuid: &Uuid) -> CacheResult<Option<String>>;

    /// Register or overwrite an alias for a UUID
    fn set_alias(&self, alias: &str, uuid: Uuid) -> CacheResult<()>;
}
