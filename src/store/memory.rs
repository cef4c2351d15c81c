use super::collection::ContactCollection;
use super::traits::{ContactStore, StorePage};
use crate::domain::{ContactId, NewContact};
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

/// In-process contact store.
///
/// Contents are lost when the process exits. Used when no data file is
/// configured, and by tests.
#[derive(Debug, Default)]
pub struct MemoryContactStore {
    collection: RwLock<ContactCollection>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn count(&self) -> StoreResult<u64> {
        Ok(self.collection.read().await.count())
    }

    async fn find_page(&self, skip: u64, limit: u64) -> StoreResult<Vec<Contact>> {
        Ok(self.collection.read().await.slice(skip, limit))
    }

    async fn page(&self, skip: u64, limit: u64) -> StoreResult<StorePage> {
        let collection = self.collection.read().await;
        Ok(StorePage {
            contacts: collection.slice(skip, limit),
            total: collection.count(),
        })
    }

    async fn insert(&self, contact: NewContact, created_at: DateTime<Utc>) -> StoreResult<Contact> {
        self.collection.write().await.insert(contact, created_at)
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<Contact> {
        self.collection
            .write()
            .await
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
