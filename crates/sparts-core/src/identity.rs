//! Identity resolution conventions
//!
//! The ledger identifies every entity by a canonical hyphenated UUID.
//! Validation here is purely structural (8-4-4-4-12 hex groups); whether an
//! entity with that UUID exists is always the ledger's call, never the
//! client's.
//!
//! A part's label may additionally carry the reserved `root:` token marking
//! the part as the root of a dependency tree; the remainder of the label is
//! then the UUID of the root artifact envelope.

use crate::part::Part;

/// Reserved label prefix marking a part as a dependency-tree root
pub const ROOT_TOKEN: &str = "root:";

/// Check that `s` matches the canonical UUID grammar.
///
/// Accepts exactly the hyphenated 8-4-4-4-12 form; braced, URN, and
/// unhyphenated renderings are rejected, as are near-miss lengths and the
/// empty string. No existence check is performed.
pub fn is_valid_uuid(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 36 {
        return false;
    }
    for (i, &b) in bytes.iter().enumerate() {
        match i {
            8 | 13 | 18 | 23 => {
                if b != b'-' {
                    return false;
                }
            }
            _ => {
                if !b.is_ascii_hexdigit() {
                    return false;
                }
            }
        }
    }
    true
}

/// Extract the root artifact UUID encoded in a part's label, if any.
///
/// Returns the portion of the label after [`ROOT_TOKEN`] when the label
/// strictly starts with the token and is strictly longer than it. A label
/// that is exactly the token carries no UUID and yields `None`. Matching is
/// case-sensitive; this is a label convention, not a schema field.
pub fn root_artifact_of(part: &Part) -> Option<&str> {
    let label = part.label.as_str();
    if label.len() > ROOT_TOKEN.len() && label.starts_with(ROOT_TOKEN) {
        Some(&label[ROOT_TOKEN.len()..])
    } else {
        None
    }
}
