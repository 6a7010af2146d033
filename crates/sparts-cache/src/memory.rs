//! In-memory part store
//!
//! The reference [`PartStore`] implementation: two maps behind one `RwLock`
//! so a refresh swaps the whole mirror atomically. Parts without a UUID
//! cannot be mirrored and are skipped with a warning (the ledger assigns
//! UUIDs, so a well-formed snapshot never contains one).

use std::collections::HashMap;
use std::sync::RwLock;

use sparts_core::Part;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{CacheError, CacheResult};
use crate::store::PartStore;

#[derive(Default)]
struct State {
    parts: HashMap<Uuid, Part>,
    aliases: HashMap<String, Uuid>,
}

/// In-memory implementation of [`PartStore`]
#[derive(Default)]
pub struct MemoryPartStore {
    state: RwLock<State>,
}

impl MemoryPartStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> CacheResult<std::sync::RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|e| CacheError::Lock(e.to_string()))
    }

    fn write(&self) -> CacheResult<std::sync::RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|e| CacheError::Lock(e.to_string()))
    }
}

impl PartStore for MemoryPartStore {
    fn part(&self, uuid: &Uuid) -> CacheResult<Option<Part>> {
        let state = self.read()?;
        let hit = state.parts.get(uuid).cloned();
        debug!(%uuid, hit = hit.is_some(), "cache part lookup");
        Ok(hit)
    }

    fn all_parts(&self) -> CacheResult<Vec<Part>> {
        let state = self.read()?;
        Ok(state.parts.values().cloned().collect())
    }

    fn replace_all(&self, parts: Vec<Part>) -> CacheResult<usize> {
        let mut fresh = HashMap::with_capacity(parts.len());
        for part in parts {
            match part.uuid {
                Some(uuid) => {
                    fresh.insert(uuid, part);
                }
                None => {
                    warn!(name = %part.name, "skipping ledger part without UUID");
                }
            }
        }

        let mut state = self.write()?;
        let count = fresh.len();
        state.parts = fresh;
        debug!(count, "cache mirror replaced");
        Ok(count)
    }

    fn uuid_for_alias(&self, alias: &str) -> CacheResult<Option<Uuid>> {
        let state = self.read()?;
        Ok(state.aliases.get(alias).copied())
    }

    fn alias_for_uuid(&self, uuid: &Uuid) -> CacheResult<Option<String>> {
        let state = self.read()?;
        Ok(state
            .aliases
            .iter()
            .find(|(_, v)| *v == uuid)
            .map(|(k, _)| k.clone()))
    }

    fn set_alias(&self, alias: &str, uuid: Uuid) -> CacheResult<()> {
        let mut state = self.write()?;
        state.aliases.insert(alias.to_owned(), uuid);
        Ok(())
    }
}
