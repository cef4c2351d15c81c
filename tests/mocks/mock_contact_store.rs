use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contact_book::domain::{ContactId, NewContact};
use contact_book::error::{StoreError, StoreResult};
use contact_book::models::Contact;
use contact_book::store::ContactStore;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Keeps contacts newest first in memory, tracks method calls for
/// verification, and can be told to fail specific methods.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactStore {
    contacts: Arc<Mutex<Vec<Contact>>>,
    next_seq: Arc<Mutex<u64>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failing: Arc<Mutex<HashSet<String>>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty MockContactStore.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            next_seq: Arc::new(Mutex::new(1)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            failing: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Make every call to `method` fail with an I/O error.
    pub fn fail_on(&self, method: &str) {
        self.failing.lock().unwrap().insert(method.to_string());
    }

    /// Stop failing calls to `method`.
    pub fn recover(&self, method: &str) {
        self.failing.lock().unwrap().remove(method);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    /// Number of stored contacts, without counting as a call.
    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    fn track_call(&self, method: &str) -> StoreResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if self.failing.lock().unwrap().contains(method) {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("injected {} failure", method),
            )));
        }
        Ok(())
    }
}

impl Default for MockContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for MockContactStore {
    async fn count(&self) -> StoreResult<u64> {
        self.track_call("count")?;
        Ok(self.contacts.lock().unwrap().len() as u64)
    }

    async fn find_page(&self, skip: u64, limit: u64) -> StoreResult<Vec<Contact>> {
        self.track_call("find_page")?;
        let contacts = self.contacts.lock().unwrap();
        Ok(contacts
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn insert(&self, contact: NewContact, created_at: DateTime<Utc>) -> StoreResult<Contact> {
        self.track_call("insert")?;

        let seq = {
            let mut next = self.next_seq.lock().unwrap();
            let seq = *next;
            *next += 1;
            seq
        };
        let id = ContactId::from_parts(created_at.timestamp() as u32, seq);
        let contact = Contact::from_new(id, contact, created_at);

        self.contacts.lock().unwrap().insert(0, contact.clone());
        Ok(contact)
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<Contact> {
        self.track_call("delete")?;

        let mut contacts = self.contacts.lock().unwrap();
        let pos = contacts
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(contacts.remove(pos))
    }
}
