//! # Primitives
//!
//! Hardcoded constants for the phonebook engine.
//!
//! These are compiled into the binary and are immutable at runtime.

/// Default location of the text store, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "phonebook.txt";

/// Maximum size of a text store the engine agrees to load (64 MB).
///
/// Larger files are reported as `StorageUnavailable` instead of being read
/// into memory.
pub const MAX_STORE_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Record separator of the text format. Each contact is two lines.
pub const LINE_SEPARATOR: char = '\n';
