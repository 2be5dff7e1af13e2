//! # Formats
//!
//! On-disk encodings of the contact set. Pure transformations, no file I/O.

pub mod persistence;

pub use persistence::{decode_records, encode_records};
