use super::collection::ContactCollection;
use super::traits::{ContactStore, StorePage};
use crate::domain::{ContactId, NewContact};
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// Contact store persisted as a single JSON document.
///
/// Every mutation is applied to a copy of the collection, written to a
/// sibling temp file and renamed over the data file; the in-memory state is
/// only replaced once the write has succeeded. A failed write leaves both the
/// file and the served data untouched.
#[derive(Debug)]
pub struct JsonFileContactStore {
    path: PathBuf,
    collection: RwLock<ContactCollection>,
}

impl JsonFileContactStore {
    /// Open the store at `path`, starting empty if the file does not exist.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let collection = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let mut collection: ContactCollection = serde_json::from_slice(&bytes)?;
                collection.normalize()?;
                tracing::info!(
                    path = %path.display(),
                    contacts = collection.count(),
                    "Loaded contact data file"
                );
                collection
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    path = %path.display(),
                    "Contact data file not found, starting empty"
                );
                ContactCollection::default()
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        Ok(Self {
            path,
            collection: RwLock::new(collection),
        })
    }

    /// Path of the backing data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, collection: &ContactCollection) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let bytes = serde_json::to_vec_pretty(collection)?;
        let tmp = temp_path(&self.path);
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[async_trait]
impl ContactStore for JsonFileContactStore {
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
        let mut collection = self.collection.write().await;
        let mut next = collection.clone();
        let created = next.insert(contact, created_at)?;
        self.persist(&next).await?;
        *collection = next;
        Ok(created)
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<Contact> {
        let mut collection = self.collection.write().await;
        let mut next = collection.clone();
        let removed = next
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.persist(&next).await?;
        *collection = next;
        Ok(removed)
    }
}
