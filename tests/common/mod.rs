//! Shared fixtures for integration tests
//!
//! Spins up a wiremock ledger and wires the real HTTP transport plus an
//! in-memory mirror to the service layer, so tests exercise the full
//! request/decode path end to end.

#![allow(dead_code)]

use sparts_cache::MemoryPartStore;
use sparts_client::{ClientConfig, DefaultMutationService, DefaultSyncService};
use sparts_transport::HttpLedgerTransport;
use std::sync::Arc;
use std::sync::Once;
use uuid::Uuid;
use wiremock::MockServer;

static TRACING: Once = Once::new();

/// Install a test subscriber honoring `RUST_LOG`, once per test binary
fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// A mock ledger with client services bound to it
pub struct TestLedger {
    pub server: MockServer,
    pub store: Arc<MemoryPartStore>,
    transport: Arc<HttpLedgerTransport>,
}

impl TestLedger {
    pub async fn start() -> Self {
        init_tracing();
        let server = MockServer::start().await;
        let transport = Arc::new(
            HttpLedgerTransport::new(&server.uri()).expect("mock server URI should parse"),
        );
        Self {
            server,
            store: Arc::new(MemoryPartStore::new()),
            transport,
        }
    }

    pub fn sync(&self) -> DefaultSyncService {
        DefaultSyncService::new(self.transport.clone(), self.store.clone())
    }

    /// Mutation service configured with a complete key pair
    pub fn mutations(&self) -> DefaultMutationService {
        let config = ClientConfig::new(self.server.uri(), "test-private-key", "test-public-key");
        DefaultMutationService::new(self.transport.clone(), config)
    }
}

/// Deterministic test UUID
pub fn uuid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

/// Ledger-shaped JSON for one part record
pub fn part_body(n: u128, name: &str, version: &str) -> serde_json::Value {
    serde_json::json!({
        "uuid": uuid(n).to_string(),
        "name": name,
        "version": version,
        "label": name,
        "licensing": "Apache-2.0",
        "description": format!("{name} test part"),
        "checksum": "0000",
    })
}
