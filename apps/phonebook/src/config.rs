//! # Configuration
//!
//! Optional `phonebook.toml` next to the working directory:
//!
//! ```toml
//! store = "phonebook.txt"
//! flush = "every-mutation"   # or "manual"
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use phonebook_core::primitives::DEFAULT_STORE_FILE;
use phonebook_core::{FlushPolicy, PhonebookError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "phonebook.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path of the text store.
    pub store: PathBuf,
    /// When mutations are written back to the store.
    pub flush: FlushPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: PathBuf::from(DEFAULT_STORE_FILE),
            flush: FlushPolicy::default(),
        }
    }
}

impl Config {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, PhonebookError> {
        toml::from_str(text).map_err(|e| PhonebookError::ConfigError(e.to_string()))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the default file
    /// is used when present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, PhonebookError> {
        match explicit {
            Some(path) => Self::read(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::read(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self, PhonebookError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            PhonebookError::ConfigError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        tracing::debug!("Loaded configuration from {:?}", path);
        Self::from_toml(&text)
    }
}
