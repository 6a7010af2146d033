//! Part, supplier, and artifact entities
//!
//! A [`Part`] mirrors one record of the remote ledger's parts collection.
//! The ledger is authoritative for every field; in particular a part created
//! locally has no UUID until the ledger assigns one on submission.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Ledger API path for the parts collection
pub const PARTS_ENDPOINT: &str = "/api/sparts/ledger/parts";

/// A tracked software/hardware component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Canonical identifier, immutable once assigned by the ledger.
    /// `None` for a part created locally before ledger acknowledgment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,

    /// Component name
    #[serde(default)]
    pub name: String,

    /// Component version
    #[serde(default)]
    pub version: String,

    /// Human-friendly label; mutable, locally cached, not globally unique.
    /// May carry the reserved root-envelope token (see [`crate::identity`]).
    #[serde(default)]
    pub label: String,

    /// Licensing expression
    #[serde(default)]
    pub licensing: String,

    /// Free-text description; may exceed display width
    #[serde(default)]
    pub description: String,

    /// Content checksum as reported by the ledger
    #[serde(default)]
    pub checksum: String,
}

impl Part {
    /// Create a new local part with the given name and version
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the licensing expression
    pub fn with_licensing(mut self, licensing: impl Into<String>) -> Self {
        self.licensing = licensing.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the checksum
    pub fn with_checksum(mut self, checksum: impl Into<String>) -> Self {
        self.checksum = checksum.into();
        self
    }

    /// Set the ledger-assigned UUID
    pub fn with_uuid(mut self, uuid: Uuid) -> Self {
        self.uuid = Some(uuid);
        self
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.uuid {
            Some(uuid) => write!(f, "{} {} ({})", self.name, self.version, uuid),
            None => write!(f, "{} {} (unsubmitted)", self.name, self.version),
        }
    }
}

/// A supplier, referenced only by UUID in relationship edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub uuid: Uuid,
}

/// A build artifact (envelope) linked to a part, referenced only by UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub uuid: Uuid,
}
