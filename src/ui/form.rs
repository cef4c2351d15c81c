//! The add-contact form.

use super::state::OpState;
use crate::domain::{validate_draft, ContactDraft, Field, FieldErrors};
use crate::error::ApiClientError;
use crate::models::Contact;

pub const ADD_FAILED: &str = "Failed to add contact";

/// Draft values, per-field errors and submit progress of the add form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    draft: ContactDraft,
    errors: FieldErrors,
    submit: OpState,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.draft.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error that is not tied to a field, from the last failed submit.
    pub fn general_error(&self) -> Option<&str> {
        self.submit.failure()
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.is_in_flight()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Adding..."
        } else {
            "Add Contact"
        }
    }

    /// Edit one field; clears that field's error only.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.clear(field);
    }

    /// Validate the draft and, if it passes, mark the form as submitting.
    ///
    /// Returns the draft to send, or `None` when validation failed or a
    /// submit is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactDraft> {
        if self.is_submitting() {
            return None;
        }
        match validate_draft(&self.draft) {
            Ok(_) => {
                self.submit = OpState::InFlight;
                Some(self.draft.clone())
            }
            Err(errors) => {
                self.errors = errors;
                self.submit = OpState::Idle;
                None
            }
        }
    }

    /// Apply the outcome of a submit; returns the created contact on success.
    pub fn finish_submit(&mut self, result: Result<Contact, ApiClientError>) -> Option<Contact> {
        match result {
            Ok(contact) => {
                self.draft = ContactDraft::default();
                self.errors = FieldErrors::new();
                self.submit = OpState::Idle;
                Some(contact)
            }
            Err(ApiClientError::Validation(errors)) => {
                self.errors = errors;
                self.submit = OpState::Idle;
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Adding contact failed");
                self.submit = OpState::Failed(ADD_FAILED.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::NAME_REQUIRED;
    use crate::domain::ContactId;
    use chrono::Utc;

    fn filled() -> FormState {
        let mut form = FormState::new();
        form.set_field(Field::Name, "Jo");
        form.set_field(Field::Email, "jo@example.com");
        form.set_field(Field::Phone, "1234567890");
        form
    }

    #[test]
    fn test_invalid_draft_is_not_submitted() {
        let mut form = FormState::new();
        assert!(form.begin_submit().is_none());
        assert!(!form.is_submitting());
        assert_eq!(form.errors().len(), 3);

        form.set_field(Field::Name, "Jo");
        assert!(!form.errors().contains(Field::Name));
        assert!(form.errors().contains(Field::Email));
    }

    #[test]
    fn test_submit_cycle() {
        let mut form = filled();
        let draft = form.begin_submit().unwrap();
        assert_eq!(draft.get(Field::Name), "Jo");
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), "Adding...");
        assert!(form.begin_submit().is_none());

        let new = validate_draft(&draft).unwrap();
        let contact = Contact::from_new(ContactId::from_parts(1, 1), new, Utc::now());
        assert!(form.finish_submit(Ok(contact)).is_some());
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.submit_label(), "Add Contact");
    }

    #[test]
    fn test_server_field_errors_shown_verbatim() {
        let mut form = filled();
        form.begin_submit().unwrap();

        let mut errors = FieldErrors::new();
        errors.insert(Field::Name, NAME_REQUIRED);
        form.finish_submit(Err(ApiClientError::Validation(errors)));

        assert!(!form.is_submitting());
        assert_eq!(form.errors().get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(form.general_error(), None);
        assert_eq!(form.value(Field::Name), "Jo");
    }

    #[test]
    fn test_other_failures_are_generic() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish_submit(Err(ApiClientError::ApiError {
            status: 500,
            message: "Failed to create contact".to_string(),
        }));

        assert!(!form.is_submitting());
        assert_eq!(form.general_error(), Some(ADD_FAILED));
    }

    #[test]
    fn test_local_validation_replaces_generic_failure() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish_submit(Err(ApiClientError::Timeout));
        assert_eq!(form.general_error(), Some(ADD_FAILED));

        form.set_field(Field::Phone, "12345");
        assert!(form.begin_submit().is_none());

        assert_eq!(form.general_error(), None);
        assert_eq!(form.errors().len(), 1);
        assert!(form.errors().contains(Field::Phone));
    }
}
