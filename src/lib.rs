//! Contact Book - a small contact manager with an HTTP API and a terminal UI.
//!
//! The server lists contacts a page at a time (newest first), creates
//! contacts after validating name, email and phone, and deletes them by id.
//! The UI keeps one page of contacts, an add form and per-row delete state,
//! and talks to the server over HTTP.
//!
//! # Architecture
//!
//! - **domain**: Value objects and the contact validation rules shared by server and UI
//! - **models**: The stored contact and the paginated list response
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **store**: Contact storage (in-memory or a JSON file)
//! - **services**: Business logic for list, create and delete
//! - **server**: axum router, handlers, middleware and the static UI bundle
//! - **client**: HTTP client for the contacts API
//! - **ui**: Client-side state objects and text rendering
//! - **metrics**: Request and operation counters

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod server;
pub mod services;
pub mod store;
pub mod ui;

pub use client::{AsyncContactsApi, AsyncContactsClient, ContactsClient};
pub use config::{ClientConfig, Config};
pub use domain::{ContactDraft, ContactId, Field, FieldErrors};
pub use error::{ApiClientError, ConfigError, ServiceError, StoreError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{Contact, ContactPage, PageRequest};
pub use server::{build_router, run_server, AppState};
pub use services::{ContactService, ContactServiceImpl};
pub use store::{ContactStore, JsonFileContactStore, MemoryContactStore};
pub use ui::ContactBook;
