//! Contact service layer.
//!
//! Business logic for listing, creating and deleting contacts.

use crate::domain::{validate_draft, ContactDraft, ContactId};
use crate::error::{ServiceError, ServiceResult};
use crate::metrics::Metrics;
use crate::models::{total_pages, Contact, ContactPage, PageRequest};
use crate::store::ContactStore;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// One page of contacts, newest first, with the collection totals.
    async fn list(&self, request: PageRequest) -> ServiceResult<ContactPage>;

    /// Validate a draft and store it.
    ///
    /// Returns `ServiceError::Validation` with every failing field when the
    /// draft breaks a rule; nothing is stored in that case.
    async fn create(&self, draft: ContactDraft) -> ServiceResult<Contact>;

    /// Delete a contact by id.
    ///
    /// Unknown ids, including malformed ones, are `ServiceError::NotFound`.
    async fn delete(&self, id: &str) -> ServiceResult<()>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    store: Arc<dyn ContactStore>,
    metrics: Metrics,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(store: Arc<dyn ContactStore>, metrics: Metrics) -> Self {
        Self { store, metrics }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list(&self, request: PageRequest) -> ServiceResult<ContactPage> {
        let page = self.store.page(request.skip(), request.limit).await?;

        tracing::debug!(
            page = request.page,
            limit = request.limit,
            returned = page.contacts.len(),
            total = page.total,
            "Listed contacts"
        );
        self.metrics.record_contacts_listed(page.contacts.len());

        Ok(ContactPage {
            total_pages: total_pages(page.total, request.limit),
            current_page: request.page,
            total_contacts: page.total,
            contacts: page.contacts,
        })
    }

    async fn create(&self, draft: ContactDraft) -> ServiceResult<Contact> {
        let new_contact = validate_draft(&draft).map_err(|errors| {
            tracing::debug!(errors = %errors, "Rejected contact draft");
            self.metrics.record_validation_failure();
            ServiceError::Validation(errors)
        })?;

        let contact = self.store.insert(new_contact, Utc::now()).await?;

        tracing::info!(contact_id = %contact.id, "Created contact");
        self.metrics.record_contact_created();
        Ok(contact)
    }

    async fn delete(&self, id: &str) -> ServiceResult<()> {
        let id = ContactId::new(id).map_err(|_| ServiceError::NotFound(id.to_string()))?;

        let removed = self.store.delete(&id).await?;

        tracing::info!(contact_id = %removed.id, "Deleted contact");
        self.metrics.record_contact_deleted();
        Ok(())
    }
}
