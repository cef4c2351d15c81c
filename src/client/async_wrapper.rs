//! Async wrapper around the synchronous ContactsClient.
//!
//! HTTP operations run on tokio's blocking thread pool via
//! `tokio::task::spawn_blocking`, so the UI's async tasks never block the runtime.

use crate::client::ContactsClient;
use crate::domain::{ContactDraft, ContactId};
use crate::error::{ApiClientError, ApiClientResult};
use crate::models::{Contact, ContactPage};
use async_trait::async_trait;
use std::sync::Arc;

/// The contacts API as seen by the UI.
#[async_trait]
pub trait AsyncContactsApi: Send + Sync {
    async fn list_contacts(&self, page: u64, limit: u64) -> ApiClientResult<ContactPage>;
    async fn create_contact(&self, draft: &ContactDraft) -> ApiClientResult<Contact>;
    async fn delete_contact(&self, id: &ContactId) -> ApiClientResult<()>;
}

/// Async wrapper around synchronous ContactsClient.
#[derive(Clone)]
pub struct AsyncContactsClient {
    client: Arc<ContactsClient>,
}

impl AsyncContactsClient {
    pub fn new(client: ContactsClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The wrapped synchronous client.
    pub fn inner(&self) -> &ContactsClient {
        &self.client
    }
}

fn join_error(e: tokio::task::JoinError) -> ApiClientError {
    ApiClientError::HttpError(format!("Task join error: {}", e))
}

#[async_trait]
impl AsyncContactsApi for AsyncContactsClient {
    async fn list_contacts(&self, page: u64, limit: u64) -> ApiClientResult<ContactPage> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.list_contacts(page, limit))
            .await
            .map_err(join_error)?
    }

    async fn create_contact(&self, draft: &ContactDraft) -> ApiClientResult<Contact> {
        let client = self.client.clone();
        let draft = draft.clone();

        tokio::task::spawn_blocking(move || client.create_contact(&draft))
            .await
            .map_err(join_error)?
    }

    async fn delete_contact(&self, id: &ContactId) -> ApiClientResult<()> {
        let client = self.client.clone();
        let id = id.clone();

        tokio::task::spawn_blocking(move || client.delete_contact(&id))
            .await
            .map_err(join_error)?
    }
}
