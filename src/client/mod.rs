//! HTTP client for the contacts API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client maps HTTP outcomes onto
//! [`ApiClientError`] so callers can tell field errors, missing records and
//! server failures apart.

mod async_wrapper;
pub use async_wrapper::{AsyncContactsApi, AsyncContactsClient};

use crate::config::ClientConfig;
use crate::domain::{ContactDraft, ContactId, FieldErrors};
use crate::error::{ApiClientError, ApiClientResult};
use crate::metrics::Metrics;
use crate::models::{Contact, ContactPage};
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Error body returned with a 400 status.
#[derive(Debug, Deserialize)]
struct ValidationBody {
    errors: FieldErrors,
}

/// Error body returned with 404 and 500 statuses.
#[derive(Debug, Deserialize)]
struct MessageBody {
    error: String,
}

/// HTTP client for the contacts API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ContactsClient {
    /// Base URL of the contacts server
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ContactsClient {
    /// Create a new ContactsClient from configuration.
    pub fn new(config: &ClientConfig) -> Self {
        Self::build(config.api_url.clone(), config.timeout())
    }

    /// Create a ContactsClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::build(base_url.into(), Duration::from_secs(10))
    }

    fn build(base_url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Run a request and record its outcome.
    fn execute(
        &self,
        method: &str,
        url: &str,
        send: impl FnOnce() -> Result<ureq::Response, ureq::Error>,
    ) -> ApiClientResult<ureq::Response> {
        let start = Instant::now();
        let result = send().map_err(Self::map_error);
        let duration = start.elapsed();

        self.metrics.record_http_request(duration);
        match &result {
            Ok(response) => {
                tracing::debug!("{} {} - status {}", method, url, response.status());
            }
            Err(e) => {
                tracing::debug!("{} {} - error: {}", method, url, e);
                self.metrics.record_http_error();
            }
        }
        result
    }

    /// Map a ureq error to an ApiClientError.
    fn map_error(error: ureq::Error) -> ApiClientError {
        match error {
            ureq::Error::Status(code, response) => {
                let body = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                if code == 400 {
                    if let Ok(parsed) = serde_json::from_str::<ValidationBody>(&body) {
                        return ApiClientError::Validation(parsed.errors);
                    }
                }

                let message = serde_json::from_str::<MessageBody>(&body)
                    .map(|b| b.error)
                    .unwrap_or(body);

                match code {
                    404 => ApiClientError::NotFound(message),
                    _ => ApiClientError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ApiClientError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ApiClientError::Timeout
                } else {
                    ApiClientError::HttpError(transport.to_string())
                }
            }
        }
    }

    fn read_json<T: serde::de::DeserializeOwned>(response: ureq::Response) -> ApiClientResult<T> {
        let body = response
            .into_string()
            .map_err(|e| ApiClientError::HttpError(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch one page of contacts.
    pub fn list_contacts(&self, page: u64, limit: u64) -> ApiClientResult<ContactPage> {
        let url = self.build_url(&format!("/api/contacts?page={}&limit={}", page, limit));
        let response = self.execute("GET", &url, || self.agent.get(&url).call())?;
        let page: ContactPage = Self::read_json(response)?;
        self.metrics.record_contacts_listed(page.contacts.len());
        Ok(page)
    }

    /// Create a contact; field errors come back as `ApiClientError::Validation`.
    pub fn create_contact(&self, draft: &ContactDraft) -> ApiClientResult<Contact> {
        let url = self.build_url("/api/contacts");
        let body = serde_json::to_value(draft)?;
        let response = self.execute("POST", &url, || {
            self.agent
                .post(&url)
                .set("Content-Type", "application/json")
                .send_json(body)
        })?;
        let contact: Contact = Self::read_json(response)?;
        self.metrics.record_contact_created();
        Ok(contact)
    }

    /// Delete a contact by id.
    pub fn delete_contact(&self, id: &ContactId) -> ApiClientResult<()> {
        let url = self.build_url(&format!(
            "/api/contacts/{}",
            urlencoding::encode(id.as_str())
        ));
        self.execute("DELETE", &url, || self.agent.delete(&url).call())?;
        self.metrics.record_contact_deleted();
        Ok(())
    }
}
