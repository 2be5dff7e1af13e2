//! Text file store: the two-lines-per-contact format on local disk.

use super::ContactStore;
use crate::formats::{decode_records, encode_records};
use crate::primitives::{DEFAULT_STORE_FILE, MAX_STORE_FILE_SIZE};
use crate::{Contact, PhonebookError};
use std::borrow::Cow;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persists contacts to a single text file.
///
/// Every save truncates and rewrites the whole file.
#[derive(Debug, Clone)]
pub struct TextFileStore {
    path: PathBuf,
}

impl TextFileStore {
    /// Create a store backed by `path`. The file is not touched until the
    /// first load or save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, reason: impl std::fmt::Display) -> PhonebookError {
        PhonebookError::storage(self.path.display(), reason)
    }
}

impl Default for TextFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

impl ContactStore for TextFileStore {
    fn load(&mut self) -> Result<Vec<Contact>, PhonebookError> {
        let metadata = match std::fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No existing phonebook data found at {:?}", self.path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.unavailable(e)),
        };

        if !metadata.is_file() {
            return Err(self.unavailable("not a regular file"));
        }

        // Validate size before reading to avoid loading arbitrary blobs
        if metadata.len() > MAX_STORE_FILE_SIZE {
            return Err(self.unavailable(format!(
                "file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_STORE_FILE_SIZE
            )));
        }

        // Bytes that are not UTF-8 become U+FFFD instead of failing the load
        let bytes = std::fs::read(&self.path).map_err(|e| self.unavailable(e))?;
        let text = String::from_utf8_lossy(&bytes);
        if matches!(text, Cow::Owned(_)) {
            tracing::warn!("{:?} holds bytes that are not UTF-8; replaced them", self.path);
        }
        let records = decode_records(&text);
        tracing::info!("Loaded {} contacts from {:?}", records.len(), self.path);
        Ok(records)
    }

    fn save(&mut self, records: &[Contact]) -> Result<(), PhonebookError> {
        std::fs::write(&self.path, encode_records(records)).map_err(|e| self.unavailable(e))?;
        tracing::info!("Saved {} contacts to {:?}", records.len(), self.path);
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
