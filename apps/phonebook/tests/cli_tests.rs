//! Integration tests for the phonebook commands and menu.
//!
//! Commands run against a text store in a temporary directory and write
//! into an in-memory buffer instead of stdout.

use phonebook::cli::{
    SearchField, cmd_add, cmd_delete, cmd_list, cmd_modify, cmd_search, cmd_status, run_menu,
};
use phonebook_core::{Contact, FlushPolicy, Phonebook, PhonebookError, TextFileStore};
use std::path::{Path, PathBuf};

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// A temp dir with the path of a store inside it.
fn temp_store() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("phonebook.txt");
    (dir, path)
}

fn open(path: &Path) -> Phonebook<TextFileStore> {
    Phonebook::open(TextFileStore::new(path))
}

/// Open a store pre-populated with a few contacts.
fn populated(path: &Path) -> Phonebook<TextFileStore> {
    let mut book = open(path);
    let mut sink = Vec::<u8>::new();
    for (name, phone) in [("Bob", "98321"), ("Alice", "11234"), ("Carol", "55123")] {
        cmd_add(&mut book, &mut sink, name, phone).expect("add");
    }
    book
}

fn output_of<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> Result<(), PhonebookError>,
{
    let mut out = Vec::new();
    f(&mut out).expect("command");
    String::from_utf8(out).expect("utf8")
}

// =============================================================================
// MUTATING COMMANDS
// =============================================================================

#[test]
fn add_writes_store_immediately() {
    let (_dir, path) = temp_store();
    let mut book = open(&path);

    let output = output_of(|out| cmd_add(&mut book, out, "Alice", "11234"));

    assert_eq!(output, "Contact added successfully!\n");
    assert_eq!(
        std::fs::read_to_string(&path).expect("read"),
        "Alice\n11234\n"
    );
}

#[test]
fn add_duplicate_is_an_error() {
    let (_dir, path) = temp_store();
    let mut book = populated(&path);

    let result = cmd_add(&mut book, &mut Vec::<u8>::new(), "Alice", "00000");

    assert_eq!(
        result,
        Err(PhonebookError::DuplicateKey("Alice".to_string()))
    );
    assert_eq!(
        book.directory().get("Alice"),
        Some(&Contact::new("Alice", "11234"))
    );
}

#[test]
fn delete_and_modify_rewrite_store() {
    let (_dir, path) = temp_store();
    let mut book = populated(&path);

    cmd_delete(&mut book, &mut Vec::<u8>::new(), "Bob").expect("delete");
    cmd_modify(&mut book, &mut Vec::<u8>::new(), "Carol", "00000").expect("modify");

    assert_eq!(
        std::fs::read_to_string(&path).expect("read"),
        "Alice\n11234\nCarol\n00000\n"
    );
}

#[test]
fn delete_missing_is_not_found() {
    let (_dir, path) = temp_store();
    let mut book = open(&path);

    assert!(matches!(
        cmd_delete(&mut book, &mut Vec::<u8>::new(), "Nobody"),
        Err(PhonebookError::NotFound(_))
    ));
    assert!(!path.exists());
}

// =============================================================================
// READ-ONLY COMMANDS
// =============================================================================

#[test]
fn list_in_both_orders() {
    let (_dir, path) = temp_store();
    let book = populated(&path);

    let ascending = output_of(|out| cmd_list(&book, out, false, false));
    let descending = output_of(|out| cmd_list(&book, out, true, false));

    assert_eq!(
        ascending,
        "Name: Alice, Phone No.: 11234\nName: Bob, Phone No.: 98321\nName: Carol, Phone No.: 55123\n"
    );
    let mut reversed: Vec<&str> = ascending.lines().collect();
    reversed.reverse();
    assert_eq!(descending.lines().collect::<Vec<_>>(), reversed);
}

#[test]
fn list_json_mode() {
    let (_dir, path) = temp_store();
    let book = populated(&path);

    let output = output_of(|out| cmd_list(&book, out, false, true));
    let parsed: Vec<Contact> = serde_json::from_str(&output).expect("json");

    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed[0], Contact::new("Alice", "11234"));
}

#[test]
fn search_by_phone_field() {
    let (_dir, path) = temp_store();
    let book = populated(&path);

    let output = output_of(|out| cmd_search(&book, out, "123", SearchField::Phone, false));

    assert_eq!(
        output,
        "Name: Alice, Phone No.: 11234\nName: Carol, Phone No.: 55123\n"
    );
}

#[test]
fn combined_search_lists_double_matches_twice() {
    let (_dir, path) = temp_store();
    let mut book = open(&path);
    cmd_add(&mut book, &mut Vec::<u8>::new(), "Agent 007", "007").expect("add");

    let output = output_of(|out| cmd_search(&book, out, "007", SearchField::Both, false));

    assert_eq!(output.lines().count(), 2);
}

#[test]
fn search_without_hits() {
    let (_dir, path) = temp_store();
    let book = open(&path);

    let output = output_of(|out| cmd_search(&book, out, "x", SearchField::Name, false));
    assert_eq!(output, "No matching contacts.\n");

    let json = output_of(|out| cmd_search(&book, out, "x", SearchField::Name, true));
    let parsed: Vec<Contact> = serde_json::from_str(&json).expect("json");
    assert!(parsed.is_empty());
}

#[test]
fn status_reports_count_and_policy() {
    let (_dir, path) = temp_store();
    let book = populated(&path);

    let output = output_of(|out| cmd_status(&book, out, true));
    let value: serde_json::Value = serde_json::from_str(&output).expect("json");

    assert_eq!(value["contacts"], 3);
    assert_eq!(value["flush"], "every-mutation");
}

// =============================================================================
// PERSISTENCE ACROSS RUNS
// =============================================================================

#[test]
fn second_run_sees_first_run() {
    let (_dir, path) = temp_store();
    drop(populated(&path));

    let book = open(&path);
    let output = output_of(|out| cmd_list(&book, out, true, false));

    assert!(output.starts_with("Name: Carol"));
}

#[test]
fn manual_policy_flushes_on_close() {
    let (_dir, path) = temp_store();
    let mut book = Phonebook::with_policy(TextFileStore::new(&path), FlushPolicy::Manual);

    cmd_add(&mut book, &mut Vec::<u8>::new(), "Zed", "1").expect("add");
    assert!(!path.exists());

    book.close().expect("close");
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "Zed\n1\n");
}

// =============================================================================
// INTERACTIVE MENU
// =============================================================================

#[test]
fn menu_session_end_to_end() {
    let (_dir, path) = temp_store();
    let mut book = open(&path);

    let script = "1\nBob\n98321\n\
                  1\nAlice\n11234\n\
                  1\nAlice\n22222\n\
                  6\nBob\n55555\n\
                  3\n555\n\
                  5\n\
                  2\nAlice\n\
                  2\nAlice\n\
                  7\n";
    let mut input = script.as_bytes();
    let output = output_of(|out| run_menu(&mut book, &mut input, out));

    assert_eq!(output.matches("Contact added successfully!").count(), 2);
    assert!(output.contains("Name is already present!"));
    assert!(output.contains("Contact modified successfully!"));
    assert!(output.contains("Name: Bob, Phone No.: 55555"));
    assert!(output.contains("Printing in Descending Order:"));
    assert!(output.contains("Contact deleted successfully!"));
    assert!(output.contains("Contact not found!"));

    assert_eq!(
        std::fs::read_to_string(&path).expect("read"),
        "Bob\n55555\n"
    );
}

#[test]
fn menu_delete_on_empty_book() {
    let (_dir, path) = temp_store();
    let mut book = open(&path);

    let mut input = "2\nAnyone\n7\n".as_bytes();
    let output = output_of(|out| run_menu(&mut book, &mut input, out));

    assert!(output.contains("Phonebook is empty!"));
}
