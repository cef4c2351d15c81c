//! Contact persistence.
//!
//! The [`ContactStore`] trait is the seam between the service layer and the
//! document collection, so the service can run against an in-memory store, a
//! file-backed store, or a test double.

mod collection;
mod json_file;
mod memory;
mod traits;

pub use json_file::JsonFileContactStore;
pub use memory::MemoryContactStore;
pub use traits::{ContactStore, StorePage};
