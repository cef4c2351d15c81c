//! Data models for the contacts resource.

pub mod contact;
pub mod page;

pub use contact::Contact;
pub use page::{total_pages, ContactPage, PageRequest, DEFAULT_LIMIT, DEFAULT_MAX_LIMIT};
