//! # Persistence Format
//!
//! Line-oriented text encoding for the contact set.
//!
//! File I/O lives in the `storage` module; this module only converts
//! between records and text.
//!
//! Format: each contact is two consecutive lines, the name then the phone,
//! written in ascending name order:
//!
//! ```text
//! Alice
//! 11234
//! Bob
//! 98321
//! ```
//!
//! There is no header and no versioning. A name or phone containing a line
//! break cannot round-trip.

use crate::Contact;
use crate::primitives::LINE_SEPARATOR;

// =============================================================================
// SERIALIZATION FUNCTIONS
// =============================================================================

/// Encode records as name/phone line pairs.
///
/// Records are written in the order given; `Directory::dump` already yields
/// ascending order.
pub fn encode_records(records: &[Contact]) -> String {
    let capacity = records
        .iter()
        .map(|c| c.name.len() + c.phone.len() + 2)
        .sum();
    let mut out = String::with_capacity(capacity);
    for record in records {
        out.push_str(&record.name);
        out.push(LINE_SEPARATOR);
        out.push_str(&record.phone);
        out.push(LINE_SEPARATOR);
    }
    out
}

/// Decode name/phone line pairs.
///
/// Reading stops at the first name line without a matching phone line.
/// Both `\n` and `\r\n` line endings are accepted.
pub fn decode_records(text: &str) -> Vec<Contact> {
    let mut lines = text.lines();
    let mut records = Vec::new();
    while let (Some(name), Some(phone)) = (lines.next(), lines.next()) {
        records.push(Contact::new(name, phone));
    }
    records
}

// =============================================================================
// TESTS
// =============================================================================
