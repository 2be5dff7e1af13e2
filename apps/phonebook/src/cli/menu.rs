//! # Interactive Menu
//!
//! The numbered console loop:
//!
//! ```text
//! 1. Add Contact
//! 2. Delete Contact
//! 3. Search Contact
//! 4. Show in Ascending Order
//! 5. Show in Descending Order
//! 6. Modify Contact
//! 7. Exit Program
//! ```
//!
//! Domain errors (duplicate, not found, failed flush) are printed and the
//! loop continues. End of input behaves like choice 7.

use super::SearchField;
use super::commands::{collect_all, collect_search, print_contacts, write_line};
use phonebook_core::{ContactStore, Order, Phonebook, PhonebookError};
use std::io::{BufRead, Write};

const MENU: &str = "\n----- MENU -----
1. Add Contact
2. Delete Contact
3. Search Contact
4. Show in Ascending Order
5. Show in Descending Order
6. Modify Contact
7. Exit Program";

/// Run the menu until choice 7 or end of input.
pub fn run_menu<S, R, W>(
    book: &mut Phonebook<S>,
    input: &mut R,
    out: &mut W,
) -> Result<(), PhonebookError>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    loop {
        write_line(out, MENU)?;
        let Some(choice) = prompt(input, out, "Enter Choice: ")? else {
            return Ok(());
        };

        match choice.trim().parse::<u32>() {
            Ok(1) => {
                let Some(name) = prompt(input, out, "Enter Name: ")? else {
                    return Ok(());
                };
                let Some(phone) = prompt(input, out, "Enter Phone No.: ")? else {
                    return Ok(());
                };
                report(out, book.insert(name, phone), "Contact added successfully!")?;
            }
            Ok(2) => {
                let Some(name) = prompt(input, out, "Enter Exact Name to delete: ")? else {
                    return Ok(());
                };
                if book.is_empty() {
                    write_line(out, "Phonebook is empty!")?;
                } else {
                    let result = book.remove(&name).map(|_| ());
                    report(out, result, "Contact deleted successfully!")?;
                }
            }
            Ok(3) => {
                let Some(query) = prompt(input, out, "Enter Name or Phone No. to search: ")?
                else {
                    return Ok(());
                };
                let hits = collect_search(book, &query, SearchField::Both);
                if hits.is_empty() {
                    write_line(out, "No matching contacts.")?;
                } else {
                    print_contacts(out, &hits, false)?;
                }
            }
            Ok(4) => {
                write_line(out, "\nPrinting in Ascending Order:")?;
                print_contacts(out, &collect_all(book, Order::Ascending), false)?;
            }
            Ok(5) => {
                write_line(out, "\nPrinting in Descending Order:")?;
                print_contacts(out, &collect_all(book, Order::Descending), false)?;
            }
            Ok(6) => {
                let Some(name) = prompt(input, out, "Enter Exact Name to modify: ")? else {
                    return Ok(());
                };
                let Some(phone) = prompt(input, out, "Enter New Phone No.: ")? else {
                    return Ok(());
                };
                report(out, book.modify(&name, phone), "Contact modified successfully!")?;
            }
            Ok(7) => return Ok(()),
            _ => write_line(out, "Enter the correct number!")?,
        }
    }
}

/// Print a prompt and read one line without its line terminator.
///
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>, PhonebookError> {
    write!(out, "{}", label)
        .and_then(|()| out.flush())
        .map_err(|e| PhonebookError::IoError(format!("Write prompt: {}", e)))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| PhonebookError::IoError(format!("Read input: {}", e)))?;
    if read == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Turn a mutation outcome into a console message.
///
/// Errors other than the recoverable domain ones are passed up.
fn report<W: Write>(
    out: &mut W,
    result: Result<(), PhonebookError>,
    success: &str,
) -> Result<(), PhonebookError> {
    match result {
        Ok(()) => write_line(out, success),
        Err(PhonebookError::DuplicateKey(_)) => write_line(out, "Name is already present!"),
        Err(PhonebookError::NotFound(_)) => write_line(out, "Contact not found!"),
        Err(e @ PhonebookError::StorageUnavailable { .. }) => {
            write_line(out, format!("Error: {} (change kept in memory)", e))
        }
        Err(e) => Err(e),
    }
}
