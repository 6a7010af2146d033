//! Mutation engine
//!
//! Pushes new parts and relationship edges to the ledger. Every mutation
//! shares one contract: the credential precondition is checked before any
//! network I/O, and validation runs payload encoding → transport →
//! status-marker check. Both edge kinds go through the single
//! [`MutationService::create_relation`] operation, dispatched by
//! [`RelationKind`]; the ledger, not the client, de-duplicates repeated
//! submissions of the same pair.

use async_trait::async_trait;
use sparts_core::{Part, RelationEdge, SignedPartEnvelope, PARTS_ENDPOINT};
use sparts_transport::LedgerTransport;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// `X-Custom-Header` value for new-part submissions
const ADD_PART_OPERATION: &str = "AddPart";

/// Trait for ledger write operations
#[async_trait]
pub trait MutationService: Send + Sync {
    /// Submit a new part to the ledger inside the signed key envelope.
    ///
    /// The ledger assigns the part's UUID on acceptance; its reply shape
    /// beyond the status marker is unspecified, so callers learn the
    /// assigned UUID by re-synchronizing.
    async fn submit_part(&self, part: &Part) -> ClientResult<()>;

    /// Create a relationship edge on the ledger.
    ///
    /// Returns `Ok(true)` only on a confirmed success status, `Ok(false)`
    /// when the ledger replied without confirming, and `Err` for
    /// precondition, transport, or malformed-response failures.
    async fn create_relation(&self, edge: RelationEdge) -> ClientResult<bool>;

    /// Link a part to its supplier
    async fn link_part_supplier(
        &self,
        part_uuid: Uuid,
        supplier_uuid: Uuid,
    ) -> ClientResult<bool> {
        self.create_relation(RelationEdge::part_supplier(part_uuid, supplier_uuid))
            .await
    }

    /// Link a part to a build artifact envelope
    async fn link_part_artifact(
        &self,
        part_uuid: Uuid,
        artifact_uuid: Uuid,
    ) -> ClientResult<bool> {
        self.create_relation(RelationEdge::part_artifact(part_uuid, artifact_uuid))
            .await
    }
}

/// Default implementation of [`MutationService`]
pub struct DefaultMutationService {
    transport: Arc<dyn LedgerTransport>,
    config: ClientConfig,
}

impl DefaultMutationService {
    /// Create a new mutation service
    pub fn new(transport: Arc<dyn LedgerTransport>, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    /// Credential precondition shared by signed mutations. Failing it never
    /// reaches the network.
    fn require_credentials(&self) -> ClientResult<(&str, &str)> {
        if self.config.private_key.is_empty() || self.config.public_key.is_empty() {
            return Err(ClientError::Configuration(
                "private and/or public key(s) are not set; configure keys before submitting"
                    .to_owned(),
            ));
        }
        Ok((&self.config.private_key, &self.config.public_key))
    }
}

#[async_trait]
impl MutationService for DefaultMutationService {
    async fn submit_part(&self, part: &Part) -> ClientResult<()> {
        let (private_key, public_key) = self.require_credentials()?;
        let envelope = SignedPartEnvelope {
            private_key: private_key.to_owned(),
            public_key: public_key.to_owned(),
            part: part.clone(),
        };
        let payload = serde_json::to_value(&envelope)?;

        let reply = self
            .transport
            .post_json(PARTS_ENDPOINT, ADD_PART_OPERATION, &payload)
            .await?;
        if !reply.is_success() {
            return Err(ClientError::NotConfirmed {
                status: reply.status,
            });
        }

        info!(name = %part.name, version = %part.version, "part submitted to ledger");
        Ok(())
    }

    async fn create_relation(&self, edge: RelationEdge) -> ClientResult<bool> {
        let (private_key, public_key) = if edge.kind.requires_signature() {
            self.require_credentials()?
        } else {
            ("", "")
        };

        // Validation order: encoding, then transport, then status marker.
        let payload = edge.wire_payload(private_key, public_key)?;
        let reply = self
            .transport
            .post_json(edge.kind.endpoint(), edge.kind.header_value(), &payload)
            .await?;

        let created = reply.is_success();
        if created {
            info!(kind = %edge.kind, part = %edge.part_uuid, other = %edge.other_uuid,
                "relationship created on ledger");
        } else {
            debug!(kind = %edge.kind, status = %reply.status,
                "ledger did not confirm relationship");
        }
        Ok(created)
    }
}
