//! # Storage Backends
//!
//! The seam between the directory and durable storage.
//!
//! The engine only ever asks a store for the full record set (`load`) or
//! hands it the full record set (`save`). There are no incremental writes
//! and no transaction log.

mod memory;
mod text_file;

pub use memory::MemoryStore;
pub use text_file::TextFileStore;

use crate::{Contact, PhonebookError};

// =============================================================================
// CONTACTSTORE TRAIT
// =============================================================================

/// A place the contact set is persisted to between runs.
pub trait ContactStore {
    /// Read the persisted record set, in stored order.
    ///
    /// A store that has never been written returns an empty set, not an
    /// error. Other failures are `PhonebookError::StorageUnavailable`.
    fn load(&mut self) -> Result<Vec<Contact>, PhonebookError>;

    /// Replace the persisted record set with `records`.
    fn save(&mut self, records: &[Contact]) -> Result<(), PhonebookError>;

    /// Human-readable location, for status output and log lines.
    fn describe(&self) -> String;
}
