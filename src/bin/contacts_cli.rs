//! Terminal front end for the Contact Book server.
//!
//! Reads one command per line and redraws the screen after each.

use anyhow::Result;
use contact_book::domain::Field;
use contact_book::ui::{delete_prompt, render, ContactBook};
use contact_book::{AsyncContactsClient, ClientConfig, ContactsClient};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Commands:
  add          fill in the form and add a contact
  delete <n>   delete the contact in row n
  next         show the next page
  prev         show the previous page
  refresh      reload the current page
  help         show this help
  quit         exit";

type Input = Lines<BufReader<Stdin>>;

fn prompt(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}

async fn ask(input: &mut Input, text: &str) -> Result<Option<String>> {
    prompt(text)?;
    Ok(input.next_line().await?)
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Email => "Email",
        Field::Phone => "Phone (10 digits)",
    }
}

/// Prompt for every form field; an empty answer keeps the current value.
async fn fill_form(book: &mut ContactBook, input: &mut Input) -> Result<bool> {
    for field in Field::ALL {
        let current = book.form().value(field).to_string();
        let text = if current.is_empty() {
            format!("{}: ", field_label(field))
        } else {
            format!("{} [{}]: ", field_label(field), current)
        };
        let Some(answer) = ask(input, &text).await? else {
            return Ok(false);
        };
        if !answer.is_empty() || current.is_empty() {
            book.set_field(field, answer);
        }
    }
    Ok(true)
}

async fn delete_row(book: &mut ContactBook, input: &mut Input, arg: Option<&str>) -> Result<()> {
    let row = arg.and_then(|a| a.parse::<usize>().ok()).filter(|n| *n > 0);
    let Some(contact) = row.and_then(|n| book.list().contacts().get(n - 1)) else {
        println!("Usage: delete <n>, where n is a row number on this page");
        return Ok(());
    };
    let id = contact.id.clone();
    let question = format!("{} [y/N] ", delete_prompt(contact.name.as_str()));

    let answer = ask(input, &question).await?.unwrap_or_default();
    let confirmed = matches!(answer.trim(), "y" | "Y" | "yes" | "YES" | "Yes");
    let confirm = move |_: &str| confirmed;
    book.delete(&id, &confirm).await;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they do not interleave with the screen.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env()?;
    let client = AsyncContactsClient::new(ContactsClient::new(&config));
    let mut book = ContactBook::new(Arc::new(client));
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    book.refresh().await;
    println!("{}", render(&book));
    println!("Type 'help' for commands.");

    loop {
        let Some(line) = ask(&mut input, "> ").await? else {
            break;
        };
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("");

        match command {
            "" => continue,
            "add" => {
                if !fill_form(&mut book, &mut input).await? {
                    break;
                }
                book.submit().await;
            }
            "delete" => delete_row(&mut book, &mut input, words.next()).await?,
            "next" => {
                book.next_page().await;
            }
            "prev" | "previous" => {
                book.previous_page().await;
            }
            "refresh" => book.refresh().await,
            "help" => {
                println!("{}", HELP);
                continue;
            }
            "quit" | "exit" => break,
            other => {
                println!("Unknown command '{}'. Type 'help' for commands.", other);
                continue;
            }
        }

        println!("{}", render(&book));
    }

    Ok(())
}
