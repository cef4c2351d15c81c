//! Client-side contact book UI.
//!
//! The screen is built from explicit state objects: [`ListState`] for the
//! current page, [`FormState`] for the add form, and a per-row delete state
//! kept by the list. [`ContactBook`] drives them against an
//! [`AsyncContactsApi`](crate::client::AsyncContactsApi) and [`render`]
//! turns them into text.

mod app;
mod form;
mod list;
mod pagination;
mod render;
mod state;

pub use app::{delete_prompt, ContactBook, TITLE};
pub use form::{FormState, ADD_FAILED};
pub use list::{ListState, DELETE_FAILED, FETCH_FAILED, PAGE_SIZE};
pub use pagination::PaginationView;
pub use render::{render, render_state, EMPTY, LOADING};
pub use state::{Confirm, OpState};
