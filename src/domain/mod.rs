//! Domain value objects and the shared contact validation rules.
//!
//! The value objects in this module can only be constructed from input that
//! satisfies the contact rules, so a [`NewContact`] is proof that a draft has
//! been validated. The same rules back the server's authoritative check and
//! the UI's advisory check.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;
pub mod validation;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
pub use validation::{validate_draft, ContactDraft, Field, FieldErrors, NewContact};
