//! Plain-text rendering of the contact book screen.

use super::app::{ContactBook, TITLE};
use super::form::FormState;
use super::list::ListState;
use super::pagination::PaginationView;
use crate::domain::Field;
use std::fmt::Write;

pub const LOADING: &str = "Loading contacts...";
pub const EMPTY: &str = "No contacts yet. Add your first contact above!";

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Email => "Email",
        Field::Phone => "Phone",
    }
}

/// Render the screen. Rows are numbered from 1 in display order.
pub fn render(book: &ContactBook) -> String {
    render_state(book.list(), book.form())
}

/// Render from the state objects directly.
pub fn render_state(list: &ListState, form: &FormState) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_screen(&mut out, list, form);
    out
}

fn write_screen(out: &mut String, list: &ListState, form: &FormState) -> std::fmt::Result {
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", "=".repeat(TITLE.len()))?;
    writeln!(out)?;

    writeln!(out, "Add New Contact")?;
    for field in Field::ALL {
        write!(out, "  {:<6} {}", format!("{}:", field_label(field)), form.value(field))?;
        if let Some(error) = form.errors().get(field) {
            write!(out, "  ! {}", error)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "  [{}]", form.submit_label())?;
    if let Some(error) = form.general_error() {
        writeln!(out, "  ! {}", error)?;
    }
    writeln!(out)?;

    writeln!(out, "Your Contacts")?;
    if let Some(error) = list.error() {
        writeln!(out, "! {}", error)?;
    }

    if list.is_loading() {
        writeln!(out, "{}", LOADING)?;
        return Ok(());
    }

    if list.contacts().is_empty() {
        writeln!(out, "{}", EMPTY)?;
    } else {
        for (i, contact) in list.contacts().iter().enumerate() {
            let action = if list.is_deleting(&contact.id) {
                "Deleting..."
            } else {
                "Delete"
            };
            writeln!(
                out,
                "{:>3}. {}  <{}>  {}  [{}]",
                i + 1,
                contact.name,
                contact.email,
                contact.phone,
                action
            )?;
        }
    }

    if let Some(view) = PaginationView::for_list(list) {
        let previous = if view.previous_enabled { "[Previous]" } else { "(Previous)" };
        let next = if view.next_enabled { "[Next]" } else { "(Next)" };
        writeln!(out, "{}  {}  {}", previous, view.label, next)?;
    }
    Ok(())
}
