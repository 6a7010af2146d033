//! Ledger reply envelope
//!
//! Mutating endpoints answer with a JSON object carrying an
//! application-level `status` field. Success is decided by comparing that
//! field exactly against `"success"`; a substring match over the raw body
//! would false-positive on any unrelated field containing the word.

use serde::{Deserialize, Serialize};

/// Marker value the ledger uses to confirm a mutation
pub const SUCCESS_STATUS: &str = "success";

/// Decoded reply body of a mutating ledger call.
///
/// Fields beyond `status` are kept verbatim in `extra`: the ledger's reply
/// contract beyond the marker is unspecified, so nothing is assumed about
/// (or lost from) the rest of the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusReply {
    /// Application-level status; empty when the ledger sent none
    #[serde(default)]
    pub status: String,

    /// Remaining reply fields, passed through undecoded
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl StatusReply {
    /// Whether the ledger confirmed the operation.
    ///
    /// Any status other than the exact marker, including an absent field,
    /// means not confirmed even when the HTTP exchange itself succeeded.
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_marker_confirmed() {
        let reply: StatusReply = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(reply.is_success());
    }

    #[test]
    fn test_failure_status_not_confirmed() {
        let reply: StatusReply = serde_json::from_str(r#"{"status":"failure"}"#).unwrap();
        assert!(!reply.is_success());
    }

    #[test]
    fn test_missing_status_not_confirmed() {
        let reply: StatusReply = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert!(!reply.is_success());
    }

    #[test]
    fn test_success_substring_elsewhere_not_confirmed() {
        // The word appearing in another field must not count.
        let reply: StatusReply =
            serde_json::from_str(r#"{"status":"failure","detail":"success is unlikely"}"#).unwrap();
        assert!(!reply.is_success());
    }

    #[test]
    fn test_extra_fields_are_preserved() {
        let reply: StatusReply =
            serde_json::from_str(r#"{"status":"success","uuid":"abc"}"#).unwrap();
        assert_eq!(reply.extra.get("uuid").and_then(|v| v.as_str()), Some("abc"));
    }
}
