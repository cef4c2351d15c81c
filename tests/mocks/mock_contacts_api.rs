use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use contact_book::client::AsyncContactsApi;
use contact_book::domain::{validate_draft, ContactDraft, ContactId};
use contact_book::error::{ApiClientError, ApiClientResult};
use contact_book::models::{total_pages, Contact, ContactPage};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contacts API for UI tests.
///
/// Behaves like the server over an in-memory list (newest first). Individual
/// operations can be switched to fail, and calls are counted.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactsApi {
    contacts: Arc<Mutex<Vec<Contact>>>,
    next_seq: Arc<Mutex<u64>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failures: Arc<Mutex<HashMap<String, u16>>>,
    requested_pages: Arc<Mutex<Vec<(u64, u64)>>>,
}

#[allow(dead_code)]
impl MockContactsApi {
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            next_seq: Arc::new(Mutex::new(1)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            failures: Arc::new(Mutex::new(HashMap::new())),
            requested_pages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Seed `count` contacts named `Contact 1`..`Contact {count}`, the last one newest.
    pub fn seed(&self, count: u64) {
        for i in 1..=count {
            let draft = ContactDraft::new(
                format!("Contact {}", i),
                format!("c{}@example.com", i),
                format!("{:010}", i),
            );
            self.store(&draft).expect("seeded contact is valid");
        }
    }

    /// Make `operation` answer with `status` until cleared.
    pub fn fail(&self, operation: &str, status: u16) {
        self.failures
            .lock()
            .unwrap()
            .insert(operation.to_string(), status);
    }

    pub fn clear_failures(&self) {
        self.failures.lock().unwrap().clear();
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.lock().unwrap().get(method).unwrap_or(&0)
    }

    /// `(page, limit)` of every list call, in order.
    pub fn requested_pages(&self) -> Vec<(u64, u64)> {
        self.requested_pages.lock().unwrap().clone()
    }

    /// Server-side view of the first `limit` contacts.
    pub fn newest(&self, limit: usize) -> Vec<Contact> {
        self.contacts
            .lock()
            .unwrap()
            .iter()
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    fn store(&self, draft: &ContactDraft) -> ApiClientResult<Contact> {
        let new = validate_draft(draft).map_err(ApiClientError::Validation)?;
        let seq = {
            let mut next = self.next_seq.lock().unwrap();
            let seq = *next;
            *next += 1;
            seq
        };
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let created_at = base + Duration::seconds(seq as i64);
        let contact = Contact::from_new(
            ContactId::from_parts(created_at.timestamp() as u32, seq),
            new,
            created_at,
        );
        self.contacts.lock().unwrap().insert(0, contact.clone());
        Ok(contact)
    }

    fn track_call(&self, method: &str) -> ApiClientResult<()> {
        *self
            .call_counts
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_insert(0) += 1;

        let failure = self.failures.lock().unwrap().get(method).copied();
        match failure {
            Some(404) => Err(ApiClientError::NotFound("Contact not found".to_string())),
            Some(status) => Err(ApiClientError::ApiError {
                status,
                message: "Server error".to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for MockContactsApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AsyncContactsApi for MockContactsApi {
    async fn list_contacts(&self, page: u64, limit: u64) -> ApiClientResult<ContactPage> {
        self.requested_pages.lock().unwrap().push((page, limit));
        self.track_call("list")?;

        let contacts = self.contacts.lock().unwrap();
        let total = contacts.len() as u64;
        Ok(ContactPage {
            contacts: contacts
                .iter()
                .skip(((page - 1) * limit) as usize)
                .take(limit as usize)
                .cloned()
                .collect(),
            current_page: page,
            total_pages: total_pages(total, limit),
            total_contacts: total,
        })
    }

    async fn create_contact(&self, draft: &ContactDraft) -> ApiClientResult<Contact> {
        self.track_call("create")?;
        self.store(draft)
    }

    async fn delete_contact(&self, id: &ContactId) -> ApiClientResult<()> {
        self.track_call("delete")?;
        let mut contacts = self.contacts.lock().unwrap();
        let pos = contacts
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| ApiClientError::NotFound("Contact not found".to_string()))?;
        contacts.remove(pos);
        Ok(())
    }
}
