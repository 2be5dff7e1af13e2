//! # phonebook-core
//!
//! The ordered contact directory behind the phonebook binary - THE ENGINE.
//!
//! This crate keeps name/phone pairs in an unbalanced binary search tree
//! keyed by name, answers exact and substring lookups, enumerates in either
//! direction and persists the full set through a pluggable store.
//!
//! ## Layout
//!
//! - `directory` → the arena BST and its traversals
//! - `formats` → the two-lines-per-contact text codec
//! - `storage` → the `ContactStore` seam (text file, in-memory)
//! - `session` → `Phonebook`, a directory bound to a store with a flush policy
//!
//! ## Architectural Constraints
//!
//! - Single-threaded and synchronous; callers serialize access
//! - No balancing: insertion order decides the tree shape
//! - No async, NO network dependencies (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod directory;
pub mod formats;
pub mod primitives;
pub mod session;
pub mod storage;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Contact, FlushPolicy, Order, PhonebookError};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use directory::{Directory, Iter};
pub use session::Phonebook;
pub use storage::{ContactStore, MemoryStore, TextFileStore};

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::{decode_records, encode_records};
