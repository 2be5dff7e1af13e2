//! # Session Module
//!
//! A `Phonebook` binds a `Directory` to a `ContactStore`.
//!
//! - Created empty, then hydrated from the store
//! - A store that cannot be loaded means "start empty", never a hard error
//! - Mutations flush the full record set according to the `FlushPolicy`
//! - A failed flush is reported but never rolled back: memory and disk may
//!   diverge until the next successful flush

use crate::directory::Directory;
use crate::storage::ContactStore;
use crate::{Contact, FlushPolicy, Order, PhonebookError};

/// A directory together with the store it is persisted to.
///
/// Not `Clone`: two sessions writing the same store would race each other.
#[derive(Debug)]
pub struct Phonebook<S: ContactStore> {
    directory: Directory,
    store: S,
    policy: FlushPolicy,
    /// Set when memory holds changes the store has not seen.
    dirty: bool,
}

impl<S: ContactStore> Phonebook<S> {
    /// Open a phonebook that flushes after every mutation.
    pub fn open(store: S) -> Self {
        Self::with_policy(store, FlushPolicy::EveryMutation)
    }

    /// Open a phonebook with an explicit flush policy.
    pub fn with_policy(mut store: S, policy: FlushPolicy) -> Self {
        let mut directory = Directory::new();
        match store.load() {
            Ok(records) => {
                let total = records.len();
                let inserted = directory.hydrate(records);
                tracing::debug!(
                    "Hydrated {} of {} records from {}",
                    inserted,
                    total,
                    store.describe()
                );
            }
            Err(e) => {
                tracing::warn!("Starting with an empty phonebook: {}", e);
            }
        }

        Self {
            directory,
            store,
            policy,
            dirty: false,
        }
    }

    /// Add a contact. Duplicates are rejected, never overwritten.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<(), PhonebookError> {
        self.directory.insert(name, phone)?;
        self.after_mutation()
    }

    /// Delete a contact by exact name.
    pub fn remove(&mut self, name: &str) -> Result<Contact, PhonebookError> {
        let removed = self.directory.remove(name)?;
        self.after_mutation()?;
        Ok(removed)
    }

    /// Change the phone of an existing contact.
    pub fn modify(
        &mut self,
        name: &str,
        new_phone: impl Into<String>,
    ) -> Result<(), PhonebookError> {
        self.directory.modify(name, new_phone)?;
        self.after_mutation()
    }

    /// Write the full record set to the store.
    ///
    /// On failure the phonebook stays dirty so a later flush can retry.
    pub fn flush(&mut self) -> Result<(), PhonebookError> {
        let records = self.directory.dump();
        match self.store.save(&records) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                self.dirty = true;
                tracing::warn!("Flush to {} failed: {}", self.store.describe(), e);
                Err(e)
            }
        }
    }

    /// Flush pending changes and release the store.
    ///
    /// A failed flush is returned and not retried on drop.
    pub fn close(mut self) -> Result<(), PhonebookError> {
        let result = if self.dirty { self.flush() } else { Ok(()) };
        self.dirty = false;
        result
    }

    /// Treat the current contents as saved, so drop does not flush them.
    ///
    /// Memory is untouched and a later flush still writes everything.
    pub fn mark_clean(&mut self) {
        if self.dirty {
            tracing::debug!("Dropping pending flush to {}", self.store.describe());
        }
        self.dirty = false;
    }

    /// Check if memory holds changes not yet written.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The active flush policy.
    #[must_use]
    pub fn policy(&self) -> FlushPolicy {
        self.policy
    }

    /// Name matches, then phone matches. See `Directory::search`.
    pub fn search<F: FnMut(&Contact)>(&self, query: &str, sink: F) -> usize {
        self.directory.search(query, sink)
    }

    /// Contacts whose name contains `query`.
    pub fn search_by_name<F: FnMut(&Contact)>(&self, query: &str, sink: F) -> usize {
        self.directory.search_by_name(query, sink)
    }

    /// Contacts whose phone contains `query`.
    pub fn search_by_phone<F: FnMut(&Contact)>(&self, query: &str, sink: F) -> usize {
        self.directory.search_by_phone(query, sink)
    }

    /// Every contact in the given order.
    pub fn show<F: FnMut(&Contact)>(&self, order: Order, sink: F) -> usize {
        self.directory.show(order, sink)
    }

    /// Number of contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.directory.len()
    }

    /// Check if there are no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directory.is_empty()
    }

    /// Read access to the underlying directory.
    #[must_use]
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Read access to the store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn after_mutation(&mut self) -> Result<(), PhonebookError> {
        match self.policy {
            FlushPolicy::EveryMutation => self.flush(),
            FlushPolicy::Manual => {
                self.dirty = true;
                Ok(())
            }
        }
    }
}

impl<S: ContactStore> Drop for Phonebook<S> {
    fn drop(&mut self) {
        if self.dirty {
            // Errors are already logged by flush
            let _ = self.flush();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
