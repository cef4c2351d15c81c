//! The contact book screen, driving the list and form against the API.

use super::form::FormState;
use super::list::{ListState, PAGE_SIZE};
use super::state::Confirm;
use crate::client::AsyncContactsApi;
use crate::domain::{ContactId, Field};
use crate::models::Contact;
use std::sync::Arc;

pub const TITLE: &str = "Contact Book";

/// Confirmation prompt shown before deleting a contact.
pub fn delete_prompt(name: &str) -> String {
    format!("Delete contact {}?", name)
}

/// The whole contact book screen.
///
/// Each action runs its state object's begin step, awaits the API, then runs
/// the finish step. Nothing is retried and a lost response is not reconciled.
pub struct ContactBook {
    api: Arc<dyn AsyncContactsApi>,
    list: ListState,
    form: FormState,
}

impl ContactBook {
    pub fn new(api: Arc<dyn AsyncContactsApi>) -> Self {
        Self {
            api,
            list: ListState::new(),
            form: FormState::new(),
        }
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Load the current page.
    pub async fn refresh(&mut self) {
        let page = self.list.begin_load();
        let result = self.api.list_contacts(page, PAGE_SIZE).await;
        self.list.finish_load(result);
    }

    /// Go to the next page and load it; does nothing on the last page.
    pub async fn next_page(&mut self) -> bool {
        if !self.list.go_next() {
            return false;
        }
        self.refresh().await;
        true
    }

    /// Go to the previous page and load it; does nothing on page 1.
    pub async fn previous_page(&mut self) -> bool {
        if !self.list.go_previous() {
            return false;
        }
        self.refresh().await;
        true
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Submit the add form; returns the created contact.
    pub async fn submit(&mut self) -> Option<Contact> {
        let draft = self.form.begin_submit()?;
        let result = self.api.create_contact(&draft).await;
        let created = self.form.finish_submit(result)?;
        self.list.prepend(created.clone());
        Some(created)
    }

    /// Delete a listed contact after the user confirms; returns true if it was removed.
    pub async fn delete(&mut self, id: &ContactId, confirm: &dyn Confirm) -> bool {
        let Some(contact) = self.list.find(id) else {
            return false;
        };
        if !confirm.confirm(&delete_prompt(contact.name.as_str())) {
            return false;
        }
        if !self.list.begin_delete(id) {
            return false;
        }

        let result = self.api.delete_contact(id).await;
        let removed = result.is_ok();
        self.list.finish_delete(id, result);
        removed
    }
}
