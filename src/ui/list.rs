//! The contact list panel: current page, totals, load and delete progress.

use super::state::OpState;
use crate::domain::ContactId;
use crate::error::ApiClientError;
use crate::models::{Contact, ContactPage, DEFAULT_LIMIT};
use std::collections::HashMap;

/// Page size the UI always requests.
pub const PAGE_SIZE: u64 = DEFAULT_LIMIT;

pub const FETCH_FAILED: &str = "Failed to fetch contacts";
pub const DELETE_FAILED: &str = "Failed to delete contact";

/// State of the contact list.
///
/// A failed load keeps the previously shown contacts. Errors from loads and
/// deletes share one message slot; starting a load clears it.
#[derive(Debug, Clone)]
pub struct ListState {
    contacts: Vec<Contact>,
    current_page: u64,
    total_pages: u64,
    load: OpState,
    error: Option<String>,
    rows: HashMap<ContactId, OpState>,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            current_page: 1,
            total_pages: 1,
            load: OpState::Idle,
            error: None,
            rows: HashMap::new(),
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_in_flight()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start loading the current page; returns the page to request.
    pub fn begin_load(&mut self) -> u64 {
        self.load = OpState::InFlight;
        self.error = None;
        self.current_page
    }

    pub fn finish_load(&mut self, result: Result<ContactPage, ApiClientError>) {
        match result {
            Ok(page) => {
                self.contacts = page.contacts;
                self.total_pages = page.total_pages.max(1);
                self.load = OpState::Idle;
            }
            Err(e) => {
                tracing::warn!(error = %e, page = self.current_page, "Loading contacts failed");
                self.error = Some(FETCH_FAILED.to_string());
                self.load = OpState::Failed(FETCH_FAILED.to_string());
            }
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Move to the next page; returns false at the last page.
    pub fn go_next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Move to the previous page; returns false at page 1.
    pub fn go_previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Show a freshly created contact at the top of the list.
    ///
    /// The list is cut back to one page without asking the server, so it can
    /// differ from the server's current first page until the next load.
    pub fn prepend(&mut self, contact: Contact) {
        self.contacts.insert(0, contact);
        self.contacts.truncate(PAGE_SIZE as usize);
    }

    pub fn find(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    pub fn row_state(&self, id: &ContactId) -> &OpState {
        static IDLE: OpState = OpState::Idle;
        self.rows.get(id).unwrap_or(&IDLE)
    }

    pub fn is_deleting(&self, id: &ContactId) -> bool {
        self.row_state(id).is_in_flight()
    }

    /// Mark a row as being deleted; returns false if it already is.
    pub fn begin_delete(&mut self, id: &ContactId) -> bool {
        if self.is_deleting(id) {
            return false;
        }
        self.rows.insert(id.clone(), OpState::InFlight);
        true
    }

    pub fn finish_delete(&mut self, id: &ContactId, result: Result<(), ApiClientError>) {
        match result {
            Ok(()) => {
                self.rows.remove(id);
                self.contacts.retain(|c| &c.id != id);
            }
            Err(e) => {
                tracing::warn!(error = %e, contact_id = %id, "Deleting contact failed");
                self.rows
                    .insert(id.clone(), OpState::Failed(DELETE_FAILED.to_string()));
                self.error = Some(DELETE_FAILED.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{validate_draft, ContactDraft};
    use chrono::Utc;

    fn contact(seq: u64) -> Contact {
        let new = validate_draft(&ContactDraft::new(
            format!("c{}", seq),
            "x@example.com",
            "1234567890",
        ))
        .unwrap();
        Contact::from_new(ContactId::from_parts(1, seq), new, Utc::now())
    }

    fn page(contacts: Vec<Contact>, total_pages: u64) -> ContactPage {
        ContactPage {
            total_contacts: contacts.len() as u64,
            contacts,
            current_page: 1,
            total_pages,
        }
    }

    #[test]
    fn test_load_cycle() {
        let mut list = ListState::new();
        assert_eq!(list.begin_load(), 1);
        assert!(list.is_loading());

        list.finish_load(Ok(page(vec![contact(1)], 2)));
        assert!(!list.is_loading());
        assert_eq!(list.contacts().len(), 1);
        assert_eq!(list.total_pages(), 2);
    }

    #[test]
    fn test_failed_load_keeps_contacts() {
        let mut list = ListState::new();
        list.begin_load();
        list.finish_load(Ok(page(vec![contact(1), contact(2)], 1)));

        list.begin_load();
        list.finish_load(Err(ApiClientError::Timeout));
        assert!(!list.is_loading());
        assert_eq!(list.error(), Some(FETCH_FAILED));
        assert_eq!(list.contacts().len(), 2);

        list.begin_load();
        assert_eq!(list.error(), None);
    }

    #[test]
    fn test_page_bounds() {
        let mut list = ListState::new();
        assert!(!list.go_previous());
        assert!(!list.go_next());

        list.finish_load(Ok(page(Vec::new(), 2)));
        assert!(list.go_next());
        assert_eq!(list.current_page(), 2);
        assert!(!list.go_next());
        assert!(list.go_previous());
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn test_prepend_truncates() {
        let mut list = ListState::new();
        list.finish_load(Ok(page((1..=10).rev().map(contact).collect(), 2)));

        list.prepend(contact(11));
        assert_eq!(list.contacts().len(), 10);
        assert_eq!(list.contacts()[0].id, ContactId::from_parts(1, 11));
        assert!(list.find(&ContactId::from_parts(1, 1)).is_none());
    }

    #[test]
    fn test_delete_cycle() {
        let mut list = ListState::new();
        list.finish_load(Ok(page(vec![contact(1), contact(2)], 1)));
        let id = ContactId::from_parts(1, 1);

        assert!(list.begin_delete(&id));
        assert!(!list.begin_delete(&id));
        assert!(list.is_deleting(&id));

        list.finish_delete(&id, Err(ApiClientError::Timeout));
        assert!(!list.is_deleting(&id));
        assert_eq!(list.error(), Some(DELETE_FAILED));
        assert!(list.find(&id).is_some());

        assert!(list.begin_delete(&id));
        list.finish_delete(&id, Ok(()));
        assert!(list.find(&id).is_none());
        assert_eq!(list.row_state(&id), &OpState::Idle);
    }
}
