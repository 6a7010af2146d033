//! Relationship edges between parts, suppliers, and artifacts
//!
//! Edges exist only as ledger-side facts created by a submission request;
//! they have no independent identity and are never stored locally. The two
//! edge kinds share one submission shape here ([`RelationEdge`]) but keep
//! their distinct wire encodings, endpoints, and dispatch headers, which the
//! ledger uses server-side for routing and auditing.
//!
//! Neither endpoint is validated for existence before submission; that check
//! belongs to the ledger.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::part::Part;

/// The kind of a relationship edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Part is provided by a supplier
    PartSupplier,
    /// Part produced a build artifact (envelope)
    PartArtifact,
}

impl RelationKind {
    /// Ledger API path that creates an edge of this kind
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::PartSupplier => "/api/sparts/ledger/parts/to-supplier",
            Self::PartArtifact => "/api/sparts/ledger/parts/AddEnvelope",
        }
    }

    /// Value for the `X-Custom-Header` the ledger dispatches on
    pub fn header_value(&self) -> &'static str {
        match self {
            Self::PartSupplier => "PartToSupplier",
            Self::PartArtifact => "PartToArtifact",
        }
    }

    /// Whether this kind's payload carries the signing key envelope
    pub fn requires_signature(&self) -> bool {
        matches!(self, Self::PartSupplier)
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PartSupplier => write!(f, "part-supplier"),
            Self::PartArtifact => write!(f, "part-artifact"),
        }
    }
}

/// A directed, typed relationship between a part and another entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationEdge {
    pub kind: RelationKind,
    pub part_uuid: Uuid,
    pub other_uuid: Uuid,
}

impl RelationEdge {
    /// Edge linking a part to its supplier
    pub fn part_supplier(part_uuid: Uuid, supplier_uuid: Uuid) -> Self {
        Self {
            kind: RelationKind::PartSupplier,
            part_uuid,
            other_uuid: supplier_uuid,
        }
    }

    /// Edge linking a part to a build artifact envelope
    pub fn part_artifact(part_uuid: Uuid, artifact_uuid: Uuid) -> Self {
        Self {
            kind: RelationKind::PartArtifact,
            part_uuid,
            other_uuid: artifact_uuid,
        }
    }

    /// Encode this edge into the JSON body its endpoint expects.
    ///
    /// Part–Supplier edges travel inside a signed key envelope; Part–Artifact
    /// edges are a bare UUID pair (the dispatch header identifies them).
    pub fn wire_payload(&self, private_key: &str, public_key: &str) -> Result<serde_json::Value> {
        let value = match self.kind {
            RelationKind::PartSupplier => serde_json::to_value(SignedRelationEnvelope {
                private_key: private_key.to_owned(),
                public_key: public_key.to_owned(),
                relation: PartSupplierPair {
                    part_uuid: self.part_uuid,
                    supplier_uuid: self.other_uuid,
                },
            })?,
            RelationKind::PartArtifact => serde_json::to_value(PartArtifactPayload {
                part_uuid: self.part_uuid,
                envelope_uuid: self.other_uuid,
            })?,
        };
        Ok(value)
    }

    /// Decode an edge back out of its wire body
    pub fn from_wire(kind: RelationKind, payload: &serde_json::Value) -> Result<Self> {
        match kind {
            RelationKind::PartSupplier => {
                let envelope: SignedRelationEnvelope =
                    serde_json::from_value(payload.clone()).map_err(CoreError::from)?;
                Ok(Self::part_supplier(
                    envelope.relation.part_uuid,
                    envelope.relation.supplier_uuid,
                ))
            }
            RelationKind::PartArtifact => {
                let payload: PartArtifactPayload =
                    serde_json::from_value(payload.clone()).map_err(CoreError::from)?;
                Ok(Self::part_artifact(payload.part_uuid, payload.envelope_uuid))
            }
        }
    }
}

/// UUID pair for a Part–Supplier edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartSupplierPair {
    pub part_uuid: Uuid,
    pub supplier_uuid: Uuid,
}

/// Signed envelope wrapping a Part–Supplier edge submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedRelationEnvelope {
    pub private_key: String,
    pub public_key: String,
    pub relation: PartSupplierPair,
}

/// Wire body for a Part–Artifact edge; the ledger names the artifact side
/// `envelope_uuid`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartArtifactPayload {
    pub part_uuid: Uuid,
    pub envelope_uuid: Uuid,
}

/// Signed envelope wrapping a new-part submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedPartEnvelope {
    pub private_key: String,
    pub public_key: String,
    pub part: Part,
}
