//! Core domain models and types for the sparts ledger client
//!
//! This crate contains the data structures and domain logic shared by the
//! cache, transport, and service layers: parts, suppliers, artifacts, the
//! relationship edges between them, and the identity conventions (UUID
//! validation, alias labels, root-envelope tokens) the ledger relies on.

pub mod error;
pub mod identity;
pub mod part;
pub mod relation;

// Re-exports for convenience
pub use error::{CoreError, Result};
pub use identity::{is_valid_uuid, root_artifact_of, ROOT_TOKEN};
pub use part::{Artifact, Part, Supplier, PARTS_ENDPOINT};
pub use relation::{
    PartArtifactPayload, PartSupplierPair, RelationEdge, RelationKind, SignedPartEnvelope,
    SignedRelationEnvelope,
};
