//! Contact validation rules shared by the API and the UI.
//!
//! The server runs [`validate_draft`] as the authoritative check before any
//! store write. The UI runs the same function before submitting so obvious
//! mistakes are caught without a round trip; its result is advisory only.

use super::{ContactName, EmailAddress, PhoneNumber};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Valid email is required";
pub const PHONE_INVALID: &str = "Phone must be 10 digits";

/// An input field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Phone];

    /// Key used for this field on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    /// Message reported when this field fails its rule.
    pub fn error_message(self) -> &'static str {
        match self {
            Field::Name => NAME_REQUIRED,
            Field::Email => EMAIL_REQUIRED,
            Field::Phone => PHONE_INVALID,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to message map, as returned in a 400 response body.
///
/// Keys are plain strings so messages from the server can be shown verbatim,
/// including keys this build does not know about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field.as_str().to_string(), message.into());
    }

    /// Remove the error for one field, leaving the others.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(field.as_str());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(field.as_str()).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(field.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Unvalidated candidate values for a new contact.
///
/// Fields missing from a request body deserialize to `None`. Numbers are
/// accepted as their decimal text; any other JSON type counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        let value = match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        };
        value.as_deref().unwrap_or("")
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        };
        *slot = Some(value.into());
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// A contact that has passed every field rule and may be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: ContactName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
}

/// Apply the three contact rules to a draft.
///
/// Every field is checked; all failures are reported together.
pub fn validate_draft(draft: &ContactDraft) -> Result<NewContact, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = draft
        .name
        .clone()
        .and_then(|n| ContactName::new(n).ok());
    if name.is_none() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    let email = draft
        .email
        .clone()
        .and_then(|e| EmailAddress::new(e).ok());
    if email.is_none() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    }

    let phone = draft
        .phone
        .clone()
        .and_then(|p| PhoneNumber::new(p).ok());
    if phone.is_none() {
        errors.insert(Field::Phone, PHONE_INVALID);
    }

    match (name, email, phone) {
        (Some(name), Some(email), Some(phone)) => Ok(NewContact { name, email, phone }),
        _ => Err(errors),
    }
}
