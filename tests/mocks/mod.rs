//! Test doubles shared by the integration tests.

mod mock_contact_store;
mod mock_contacts_api;

#[allow(unused_imports)]
pub use mock_contact_store::MockContactStore;
#[allow(unused_imports)]
pub use mock_contacts_api::MockContactsApi;
