//! Contact model, the sole persisted entity.

use crate::domain::{ContactId, ContactName, EmailAddress, NewContact, PhoneNumber};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact.
///
/// Wire shape: `{id, name, email, phone, createdAt}`. Every field is a
/// validated value object, so deserializing a record that breaks a contact
/// rule fails.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Store-assigned identifier
    pub id: ContactId,

    /// Display name
    pub name: ContactName,

    /// Email address
    pub email: EmailAddress,

    /// Ten-digit phone number
    pub phone: PhoneNumber,

    /// Insertion time, the listing sort key
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Build a stored contact from validated fields and store-assigned metadata.
    pub fn from_new(id: ContactId, new: NewContact, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            created_at,
        }
    }
}
