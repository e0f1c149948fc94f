//! Element identifiers.
//!
//! An identifier is either an explicit string supplied by the caller or the
//! distinguished unassigned marker. Text-bearing elements constructed
//! without an explicit identifier derive one from their initial text; the
//! identifier is fixed at construction and is never recomputed, so it
//! tracks the original extracted fragment even after cleaning mutates the
//! text.

use sha2::{Digest, Sha256};
use std::fmt;
use std::fmt::Write as _;

/// Number of hex characters kept from the content hash (128 bits).
const DERIVED_ID_LEN: usize = 32;

/// An element identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// An identifier supplied by the caller or derived from content.
    Assigned(String),
    /// No identifier has been assigned.
    Unassigned,
}

impl ElementId {
    /// Identifier for a text-bearing element: the explicit id if supplied,
    /// otherwise derived from the element's initial text.
    pub fn for_text(explicit: Option<String>, text: &str) -> Self {
        match explicit {
            Some(id) => ElementId::Assigned(id),
            None => ElementId::Assigned(derive_from_text(text)),
        }
    }

    /// Identifier for a non-text element: the explicit id if supplied,
    /// otherwise the unassigned marker. Non-text elements never derive an
    /// identifier from content.
    pub fn explicit_or_unassigned(explicit: Option<String>) -> Self {
        match explicit {
            Some(id) => ElementId::Assigned(id),
            None => ElementId::Unassigned,
        }
    }

    /// Check whether an identifier has been assigned.
    pub fn is_assigned(&self) -> bool {
        matches!(self, ElementId::Assigned(_))
    }

    /// Get the identifier string, or `None` if unassigned.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ElementId::Assigned(id) => Some(id),
            ElementId::Unassigned => None,
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementId::Assigned(id) => f.write_str(id),
            ElementId::Unassigned => f.write_str("<unassigned>"),
        }
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        ElementId::Assigned(id.to_string())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        ElementId::Assigned(id)
    }
}

/// Derive a stable identifier from element text.
///
/// SHA-256 over the UTF-8 bytes, rendered as lowercase hex and truncated
/// to the first 32 characters. Deterministic: equal text yields equal
/// identifiers.
pub fn derive_from_text(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let mut hex = String::with_capacity(DERIVED_ID_LEN);
    // 32 hex chars cover the first 16 digest bytes
    for byte in &digest[..DERIVED_ID_LEN / 2] {
        let _ = write!(hex, "{:02x}", byte);
    }
    hex
}
