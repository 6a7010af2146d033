//! Sync engine
//!
//! Pulls the authoritative parts collection (or single records) from the
//! ledger into the local mirror. Reads are synchronous in effect: one
//! request at a time, awaited to completion, no retries. A bulk fetch
//! isolates per-item failures so one bad record never aborts the rest of a
//! listing.

use async_trait::async_trait;
use sparts_cache::PartStore;
use sparts_core::{identity, Part, PARTS_ENDPOINT};
use sparts_transport::LedgerTransport;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{ClientError, ClientResult};

/// Client-side filter over the fetched parts collection.
///
/// The ledger's list endpoint has no query parameters; filtering narrows
/// the decoded collection. The default filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct PartFilter {
    /// Case-insensitive substring match on the part name
    pub name: Option<String>,

    /// Exact match on the part version
    pub version: Option<String>,
}

impl PartFilter {
    /// Filter matching every part
    pub fn all() -> Self {
        Self::default()
    }

    /// Require the name to contain `needle` (case-insensitive)
    pub fn name(mut self, needle: impl Into<String>) -> Self {
        self.name = Some(needle.into());
        self
    }

    /// Require an exact version
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    fn matches(&self, part: &Part) -> bool {
        if let Some(ref needle) = self.name {
            if !part.name.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }
        if let Some(ref version) = self.version {
            if part.version != *version {
                return false;
            }
        }
        true
    }
}

/// One failed item of a bulk fetch, attributable to its UUID
#[derive(Debug)]
pub struct FetchFailure {
    pub uuid: String,
    pub reason: ClientError,
}

/// Outcome of a bulk fetch: everything that succeeded plus every isolated
/// failure. The batch itself always completes.
#[derive(Debug, Default)]
pub struct BulkFetch {
    pub parts: Vec<Part>,
    pub failures: Vec<FetchFailure>,
}

/// Trait for ledger read operations
#[async_trait]
pub trait SyncService: Send + Sync {
    /// Fetch the parts collection, narrowed by `filter`. An empty result is
    /// valid, not a failure; callers should offer a "nothing cached — try
    /// synchronizing" affordance.
    async fn fetch_part_list(&self, filter: &PartFilter) -> ClientResult<Vec<Part>>;

    /// Fetch a single part's full record by UUID. The UUID is validated
    /// structurally before any network call.
    async fn fetch_part(&self, uuid: &str) -> ClientResult<Part>;

    /// Fetch several parts, isolating per-item failures
    async fn fetch_parts(&self, uuids: &[String]) -> BulkFetch;

    /// Pull the full collection and atomically replace the local mirror.
    /// Returns the number of parts now cached.
    async fn synchronize(&self) -> ClientResult<usize>;

    /// Resolve user input that may be a UUID or a local alias. A miss is
    /// `Ok(None)`, never an error.
    fn resolve_uuid(&self, value: &str) -> ClientResult<Option<Uuid>>;
}

/// Default implementation of [`SyncService`]
pub struct DefaultSyncService {
    transport: Arc<dyn LedgerTransport>,
    store: Arc<dyn PartStore>,
}

impl DefaultSyncService {
    /// Create a new sync service
    pub fn new(transport: Arc<dyn LedgerTransport>, store: Arc<dyn PartStore>) -> Self {
        Self { transport, store }
    }
}

#[async_trait]
impl SyncService for DefaultSyncService {
    async fn fetch_part_list(&self, filter: &PartFilter) -> ClientResult<Vec<Part>> {
        let bytes = self.transport.get_bytes(PARTS_ENDPOINT).await?;
        let parts: Vec<Part> = serde_json::from_slice(&bytes).map_err(|e| {
            ClientError::MalformedResponse(format!("part list reply did not decode: {e}"))
        })?;

        debug!(fetched = parts.len(), "fetched part list from ledger");
        Ok(parts.into_iter().filter(|p| filter.matches(p)).collect())
    }

    async fn fetch_part(&self, uuid: &str) -> ClientResult<Part> {
        // Fail fast on malformed input; no wasted round-trip.
        if !identity::is_valid_uuid(uuid) {
            return Err(ClientError::InvalidUuid(uuid.to_owned()));
        }

        let path = format!("{PARTS_ENDPOINT}/{uuid}");
        let bytes = self.transport.get_bytes(&path).await?;
        let part: Part = serde_json::from_slice(&bytes).map_err(|e| {
            ClientError::MalformedResponse(format!("part reply for {uuid} did not decode: {e}"))
        })?;

        // The ledger answers an unknown UUID with a record carrying none.
        if part.uuid.is_none() {
            return Err(ClientError::NotFound(uuid.to_owned()));
        }
        Ok(part)
    }

    async fn fetch_parts(&self, uuids: &[String]) -> BulkFetch {
        let mut outcome = BulkFetch::default();
        for uuid in uuids {
            match self.fetch_part(uuid).await {
                Ok(part) => outcome.parts.push(part),
                Err(reason) => {
                    warn!(%uuid, %reason, "could not retrieve part");
                    outcome.failures.push(FetchFailure {
                        uuid: uuid.clone(),
                        reason,
                    });
                }
            }
        }
        outcome
    }

    async fn synchronize(&self) -> ClientResult<usize> {
        let parts = self.fetch_part_list(&PartFilter::all()).await?;
        let count = self.store.replace_all(parts)?;
        info!(count, "local mirror synchronized with ledger");
        Ok(count)
    }

    fn resolve_uuid(&self, value: &str) -> ClientResult<Option<Uuid>> {
        if identity::is_valid_uuid(value) {
            // Structural validation above guarantees this parses.
            return Ok(Uuid::parse_str(value).ok());
        }
        Ok(self.store.uuid_for_alias(value)?)
    }
}
