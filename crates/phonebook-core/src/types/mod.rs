//! # Core Type Definitions
//!
//! This module contains the shared types of the phonebook engine:
//! - The stored record (`Contact`)
//! - Traversal direction (`Order`)
//! - Persistence cadence (`FlushPolicy`)
//! - Error types (`PhonebookError`)
//!
//! ## Ordering
//!
//! Names compare by plain `str` ordering (byte-wise, which for UTF-8 is
//! code-point order). There is no case folding and no locale collation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// CONTACT
// =============================================================================

/// One name/phone record.
///
/// The name is the directory key. The phone is an opaque string; no format
/// checks are applied to either field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Contact {
    /// The unique key.
    pub name: String,
    /// The associated phone number.
    pub phone: String,
}

impl Contact {
    /// Create a new contact.
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the phone as a string slice.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Phone No.: {}", self.name, self.phone)
    }
}

// =============================================================================
// TRAVERSAL ORDER
// =============================================================================

/// Direction of a full traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// In-order: left, self, right. Keys increase.
    #[default]
    Ascending,
    /// Reverse in-order: right, self, left. Keys decrease.
    Descending,
}

// =============================================================================
// FLUSH POLICY
// =============================================================================

/// When a `Phonebook` writes its directory back to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlushPolicy {
    /// Rewrite the store after every successful insert, remove or modify.
    #[default]
    EveryMutation,
    /// Only write on explicit `flush()`, `close()` or drop.
    Manual,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the phonebook.
///
/// Every variant is recoverable at the call site. A failed operation leaves
/// the directory unchanged, except for `StorageUnavailable` raised by a
/// flush: the in-memory mutation that triggered it is kept.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhonebookError {
    /// Insert with a name that is already present.
    #[error("Name is already present: {0}")]
    DuplicateKey(String),

    /// Remove or modify with a name that is not present.
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The backing store could not be read or written.
    #[error("Storage unavailable at {path}: {reason}")]
    StorageUnavailable { path: String, reason: String },

    /// Console I/O failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// The configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl PhonebookError {
    /// Build a `StorageUnavailable` error for a store location.
    pub fn storage(path: impl fmt::Display, reason: impl fmt::Display) -> Self {
        Self::StorageUnavailable {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
