//! ContactId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored contact.
///
/// IDs are opaque to callers. IDs minted by a store have the shape of a
/// document-store object id: 8 hex digits of the insertion second followed by
/// 16 hex digits of the store's insertion sequence.
///
/// # Example
///
/// ```
/// use contact_book::domain::ContactId;
///
/// let id = ContactId::new("65a1b2c3d4e5f60718293a4b").unwrap();
/// assert_eq!(id.as_str(), "65a1b2c3d4e5f60718293a4b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactId(String);

impl ContactId {
    /// Wrap an id received from a caller. Only blank ids are rejected.
    ///
    /// # Errors
    ///
    /// `ValidationError::EmptyId` for an empty or whitespace-only id.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Mint an ID from an insertion timestamp (seconds) and a store sequence number.
    pub fn from_parts(timestamp_secs: u32, seq: u64) -> Self {
        Self(format!("{:08x}{:016x}", timestamp_secs, seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ContactId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContactId> for String {
    fn from(value: ContactId) -> Self {
        value.0
    }
}

impl AsRef<str> for ContactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
