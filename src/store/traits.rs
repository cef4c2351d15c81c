use crate::domain::{ContactId, NewContact};
use crate::error::StoreResult;
use crate::models::Contact;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A slice of the collection together with the collection size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePage {
    pub contacts: Vec<Contact>,
    pub total: u64,
}

/// Store for contact records.
///
/// Listing order is always `created_at` descending; records inserted with the
/// same timestamp list the later insertion first.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Number of stored contacts.
    async fn count(&self) -> StoreResult<u64>;

    /// Up to `limit` contacts after skipping `skip`, newest first.
    async fn find_page(&self, skip: u64, limit: u64) -> StoreResult<Vec<Contact>>;

    /// Count and slice together.
    ///
    /// The default issues two independent reads, so a concurrent write can
    /// make `total` and `contacts` disagree. Stores that can read both from
    /// one snapshot override this.
    async fn page(&self, skip: u64, limit: u64) -> StoreResult<StorePage> {
        let total = self.count().await?;
        let contacts = self.find_page(skip, limit).await?;
        Ok(StorePage { contacts, total })
    }

    /// Persist a validated contact, assigning its id.
    async fn insert(&self, contact: NewContact, created_at: DateTime<Utc>) -> StoreResult<Contact>;

    /// Remove a contact by id, returning the removed record.
    ///
    /// Returns `StoreError::NotFound` without side effects if the id is unknown.
    async fn delete(&self, id: &ContactId) -> StoreResult<Contact>;
}
