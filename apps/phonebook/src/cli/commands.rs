//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//!
//! Commands write to any `Write` sink so they can be driven from tests.

use super::SearchField;
use phonebook_core::{Contact, ContactStore, FlushPolicy, Order, Phonebook, PhonebookError};
use std::fmt::Display;
use std::io::Write;

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Write one line, mapping I/O failures into the phonebook error type.
pub fn write_line(out: &mut impl Write, line: impl Display) -> Result<(), PhonebookError> {
    writeln!(out, "{}", line).map_err(|e| PhonebookError::IoError(format!("Write output: {}", e)))
}

/// Print contacts one per line, or as a JSON array.
pub fn print_contacts(
    out: &mut impl Write,
    contacts: &[Contact],
    json_mode: bool,
) -> Result<(), PhonebookError> {
    if json_mode {
        let json = serde_json::to_string_pretty(contacts)
            .map_err(|e| PhonebookError::IoError(format!("Encode JSON: {}", e)))?;
        return write_line(out, json);
    }

    for contact in contacts {
        write_line(out, contact)?;
    }
    Ok(())
}

// =============================================================================
// MUTATING COMMANDS
// =============================================================================

/// Add a contact.
pub fn cmd_add<S: ContactStore>(
    book: &mut Phonebook<S>,
    out: &mut impl Write,
    name: &str,
    phone: &str,
) -> Result<(), PhonebookError> {
    tracing::info!("Adding contact {:?}", name);
    book.insert(name, phone)?;
    write_line(out, "Contact added successfully!")
}

/// Delete a contact by exact name.
pub fn cmd_delete<S: ContactStore>(
    book: &mut Phonebook<S>,
    out: &mut impl Write,
    name: &str,
) -> Result<(), PhonebookError> {
    tracing::info!("Deleting contact {:?}", name);
    book.remove(name)?;
    write_line(out, "Contact deleted successfully!")
}

/// Change the phone number of a contact.
pub fn cmd_modify<S: ContactStore>(
    book: &mut Phonebook<S>,
    out: &mut impl Write,
    name: &str,
    phone: &str,
) -> Result<(), PhonebookError> {
    tracing::info!("Modifying contact {:?}", name);
    book.modify(name, phone)?;
    write_line(out, "Contact modified successfully!")
}

// =============================================================================
// READ-ONLY COMMANDS
// =============================================================================

/// Collect search hits for a field selection.
pub fn collect_search<S: ContactStore>(
    book: &Phonebook<S>,
    query: &str,
    field: SearchField,
) -> Vec<Contact> {
    let mut hits = Vec::new();
    let sink = |c: &Contact| hits.push(c.clone());
    match field {
        SearchField::Name => book.search_by_name(query, sink),
        SearchField::Phone => book.search_by_phone(query, sink),
        SearchField::Both => book.search(query, sink),
    };
    hits
}

/// Search contacts by substring.
pub fn cmd_search<S: ContactStore>(
    book: &Phonebook<S>,
    out: &mut impl Write,
    query: &str,
    field: SearchField,
    json_mode: bool,
) -> Result<(), PhonebookError> {
    let hits = collect_search(book, query, field);
    tracing::debug!("Search {:?} ({:?}) matched {}", query, field, hits.len());

    if hits.is_empty() && !json_mode {
        return write_line(out, "No matching contacts.");
    }
    print_contacts(out, &hits, json_mode)
}

/// Collect every contact in the given order.
pub fn collect_all<S: ContactStore>(book: &Phonebook<S>, order: Order) -> Vec<Contact> {
    let mut all = Vec::with_capacity(book.len());
    book.show(order, |c| all.push(c.clone()));
    all
}

/// List all contacts.
pub fn cmd_list<S: ContactStore>(
    book: &Phonebook<S>,
    out: &mut impl Write,
    descending: bool,
    json_mode: bool,
) -> Result<(), PhonebookError> {
    let order = if descending {
        Order::Descending
    } else {
        Order::Ascending
    };
    print_contacts(out, &collect_all(book, order), json_mode)
}

/// Show contact count and store location.
pub fn cmd_status<S: ContactStore>(
    book: &Phonebook<S>,
    out: &mut impl Write,
    json_mode: bool,
) -> Result<(), PhonebookError> {
    let flush = match book.policy() {
        FlushPolicy::EveryMutation => "every-mutation",
        FlushPolicy::Manual => "manual",
    };

    if json_mode {
        let output = serde_json::json!({
            "store": book.store().describe(),
            "contacts": book.len(),
            "flush": flush,
        });
        return write_line(
            out,
            serde_json::to_string_pretty(&output).unwrap_or_default(),
        );
    }

    write_line(out, "Phonebook Status")?;
    write_line(out, "================")?;
    write_line(out, format!("Store:    {}", book.store().describe()))?;
    write_line(out, format!("Contacts: {}", book.len()))?;
    write_line(out, format!("Flush:    {}", flush))
}
