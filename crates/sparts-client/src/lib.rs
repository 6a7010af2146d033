//! Service layer for the sparts ledger client
//!
//! This crate sits between a presentation layer (CLI, TUI) and the transport
//! and cache layers. It implements the two engines with a non-trivial
//! contract:
//!
//! - **SyncService**: pulls the authoritative parts collection (or single
//!   records) from the ledger into the local mirror, isolating per-item
//!   failures during bulk fetches.
//! - **MutationService**: pushes new parts and relationship edges to the
//!   ledger, enforcing the credential precondition before any network I/O
//!   and the encoding → transport → status-marker validation order.
//!
//! # Example
//!
//! ```rust,no_run
//! use sparts_cache::MemoryPartStore;
//! use sparts_client::{ClientConfig, DefaultMutationService, DefaultSyncService, SyncService};
//! use sparts_transport::HttpLedgerTransport;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::load()?;
//! let transport = Arc::new(HttpLedgerTransport::new(&config.ledger_address)?);
//! let store = Arc::new(MemoryPartStore::new());
//!
//! let sync = DefaultSyncService::new(transport.clone(), store.clone());
//! let cached = sync.synchronize().await?;
//! println!("{cached} parts mirrored");
//!
//! let _mutations = DefaultMutationService::new(transport, config);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod mutation;
pub mod sync;

// Re-export main types for convenience
pub use config::{ClientConfig, Credentials};
pub use error::{ClientError, ClientResult};
pub use mutation::{DefaultMutationService, MutationService};
pub use sync::{BulkFetch, DefaultSyncService, FetchFailure, PartFilter, SyncService};
