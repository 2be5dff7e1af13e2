//! In-memory store: keeps the last saved record set.

use super::ContactStore;
use crate::{Contact, PhonebookError};

/// A volatile store, useful for tests and throwaway sessions.
///
/// `fail_saves` makes every save return `StorageUnavailable`, which is how
/// the partial-failure contract of a flush is exercised.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<Contact>,
    saves: usize,
    failed_saves: usize,
    fail_saves: bool,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `records`.
    #[must_use]
    pub fn with_records(records: Vec<Contact>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Make subsequent saves succeed or fail.
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// The record set as last saved.
    #[must_use]
    pub fn records(&self) -> &[Contact] {
        &self.records
    }

    /// Number of successful saves so far.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Number of saves rejected while failing.
    #[must_use]
    pub fn failed_save_count(&self) -> usize {
        self.failed_saves
    }
}

impl ContactStore for MemoryStore {
    fn load(&mut self) -> Result<Vec<Contact>, PhonebookError> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[Contact]) -> Result<(), PhonebookError> {
        if self.fail_saves {
            self.failed_saves += 1;
            return Err(PhonebookError::storage(self.describe(), "saves disabled"));
        }
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
