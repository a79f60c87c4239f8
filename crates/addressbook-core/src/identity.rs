//! # Contact Identifier
//!
//! Contacts are addressed by an opaque string on the wire. Internally the
//! identifier is a UUID v4 newtype. Only the exact string a record was
//! created with addresses it: other spellings of the same UUID (uppercase,
//! unhyphenated, `urn:uuid:`) name no record.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a stored contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Generate a new random contact identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a wire identifier. Returns `None` unless `raw` is exactly the
    /// lowercase hyphenated form that [`Display`](fmt::Display) produces.
    pub fn parse(raw: &str) -> Option<Self> {
        let uuid = Uuid::parse_str(raw).ok()?;
        (uuid.hyphenated().to_string() == raw).then_some(Self(uuid))
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
