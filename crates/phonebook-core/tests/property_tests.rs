//! # Property-Based Tests
//!
//! Ordering and persistence invariants of the directory, checked with proptest.

use phonebook_core::{Contact, Directory, Order, decode_records, encode_records};
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// Short names so random sequences collide often.
fn name() -> impl Strategy<Value = String> {
    "[a-e]{1,3}"
}

fn phone() -> impl Strategy<Value = String> {
    "[0-9]{0,6}"
}

/// An insert (`true`) or remove (`false`) of a name.
fn operation() -> impl Strategy<Value = (bool, String, String)> {
    (any::<bool>(), name(), phone())
}

fn ascending_names(directory: &Directory) -> Vec<String> {
    directory
        .iter(Order::Ascending)
        .map(|c| c.name.clone())
        .collect()
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// In-order traversal is strictly increasing after any insert/remove mix,
    /// and the directory agrees with a BTreeMap model.
    #[test]
    fn bst_order_holds_under_mutation(ops in vec(operation(), 0..200)) {
        let mut directory = Directory::new();
        let mut model: BTreeMap<String, String> = BTreeMap::new();

        for (is_insert, name, phone) in ops {
            if is_insert {
                let result = directory.insert(name.clone(), phone.clone());
                prop_assert_eq!(result.is_ok(), !model.contains_key(&name));
                model.entry(name).or_insert(phone);
            } else {
                let result = directory.remove(&name);
                prop_assert_eq!(result.ok().map(|c| c.phone), model.remove(&name));
            }

            let names = ascending_names(&directory);
            prop_assert!(names.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(directory.len(), model.len());
        }

        let expected: Vec<Contact> = model
            .into_iter()
            .map(|(name, phone)| Contact::new(name, phone))
            .collect();
        prop_assert_eq!(directory.dump(), expected);
    }

    /// hydrate(dump()) into a fresh directory reproduces the same pairs.
    #[test]
    fn dump_hydrate_roundtrip(records in vec((name(), phone()), 0..100)) {
        let mut original = Directory::new();
        for (name, phone) in records {
            let _ = original.insert(name, phone);
        }

        let mut restored = Directory::new();
        restored.hydrate(original.dump());

        let a: BTreeSet<Contact> = original.dump().into_iter().collect();
        let b: BTreeSet<Contact> = restored.dump().into_iter().collect();
        prop_assert_eq!(a, b);
    }

    /// The text codec carries a dump through unchanged.
    #[test]
    fn text_format_roundtrip(records in vec((name(), phone()), 0..50)) {
        let mut directory = Directory::new();
        for (name, phone) in records {
            let _ = directory.insert(name, phone);
        }

        let dump = directory.dump();
        prop_assert_eq!(decode_records(&encode_records(&dump)), dump);
    }

    /// Descending output is ascending output reversed.
    #[test]
    fn ascending_descending_symmetry(names in vec(name(), 1..60)) {
        let mut directory = Directory::new();
        for name in names {
            let _ = directory.insert(name, "");
        }

        let mut ascending = Vec::new();
        let mut descending = Vec::new();
        directory.show_ascending(|c| ascending.push(c.clone()));
        directory.show_descending(|c| descending.push(c.clone()));

        ascending.reverse();
        prop_assert_eq!(ascending, descending);
    }

    /// A second insert of the same name is rejected and the first phone kept.
    #[test]
    fn duplicate_insert_keeps_first_phone(key in name(), first in phone(), second in phone()) {
        let mut directory = Directory::new();
        directory.insert(key.clone(), first.clone()).expect("insert");

        prop_assert!(directory.insert(key.clone(), second).is_err());
        prop_assert_eq!(directory.get(&key).map(|c| c.phone.clone()), Some(first));
        prop_assert_eq!(directory.len(), 1);
    }

    /// Search visits the whole tree: results equal a linear filter.
    #[test]
    fn search_matches_linear_filter(records in vec((name(), phone()), 0..60), query in "[a-e0-9]{0,2}") {
        let mut directory = Directory::new();
        for (name, phone) in records {
            let _ = directory.insert(name, phone);
        }

        let all = directory.dump();
        let name_hits: Vec<Contact> = all
            .iter()
            .filter(|c| c.name.contains(query.as_str()))
            .cloned()
            .collect();
        let phone_hits: Vec<Contact> = all
            .iter()
            .filter(|c| c.phone.contains(query.as_str()))
            .cloned()
            .collect();

        let mut by_name = Vec::new();
        directory.search_by_name(&query, |c| by_name.push(c.clone()));
        prop_assert_eq!(&by_name, &name_hits);

        let mut by_phone = Vec::new();
        directory.search_by_phone(&query, |c| by_phone.push(c.clone()));
        prop_assert_eq!(&by_phone, &phone_hits);

        let mut combined = Vec::new();
        let count = directory.search(&query, |c| combined.push(c.clone()));
        prop_assert_eq!(count, name_hits.len() + phone_hits.len());
        let expected: Vec<Contact> = name_hits.into_iter().chain(phone_hits).collect();
        prop_assert_eq!(combined, expected);
    }
}
