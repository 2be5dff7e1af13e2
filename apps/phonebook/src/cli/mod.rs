//! # Phonebook CLI Module
//!
//! This module implements the CLI interface for the phonebook.
//!
//! ## Available Commands
//!
//! - `add` - Add a contact
//! - `delete` - Delete a contact by exact name
//! - `modify` - Change the phone of a contact
//! - `search` - Substring search on name and/or phone
//! - `list` - Show all contacts in ascending or descending order
//! - `status` - Show contact count and store location
//! - `menu` - Interactive numbered menu (default when no command is given)

mod commands;
mod menu;

use crate::config::Config;
use clap::{Parser, Subcommand, ValueEnum};
use phonebook_core::{Phonebook, PhonebookError, TextFileStore};
use std::path::PathBuf;

pub use commands::*;
pub use menu::run_menu;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Phonebook - ordered contact directory
///
/// Contacts are kept sorted by name and written back to a plain text file.
#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the configuration file
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the text store (overrides the configuration file)
    #[arg(short = 'S', long, global = true)]
    pub store: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Which field a search looks at.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Name only
    Name,
    /// Phone only
    Phone,
    /// Name matches, then phone matches
    Both,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact
    Add {
        /// Contact name (unique key)
        #[arg(short, long)]
        name: String,

        /// Phone number
        #[arg(short, long)]
        phone: String,
    },

    /// Delete a contact by exact name
    Delete {
        /// Contact name
        #[arg(short, long)]
        name: String,
    },

    /// Change the phone number of a contact
    Modify {
        /// Contact name
        #[arg(short, long)]
        name: String,

        /// New phone number
        #[arg(short, long)]
        phone: String,
    },

    /// Search contacts by substring
    Search {
        /// Text to look for
        query: String,

        /// Field to search
        #[arg(short, long, value_enum, default_value = "both")]
        field: SearchField,
    },

    /// List all contacts
    List {
        /// Highest name first
        #[arg(short, long)]
        descending: bool,
    },

    /// Show contact count and store location
    Status,

    /// Interactive menu
    Menu,
}

impl Cli {
    /// Check if this invocation ends up in the interactive menu.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Menu))
    }

    /// Resolve configuration, applying command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, PhonebookError> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(store) = &self.store {
            config.store = store.clone();
        }
        Ok(config)
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), PhonebookError> {
    let config = cli.resolve_config()?;
    tracing::debug!("Using store {:?} (flush: {:?})", config.store, config.flush);

    let mut book = Phonebook::with_policy(TextFileStore::new(&config.store), config.flush);
    let json_mode = cli.json_mode;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let outcome = match cli.command {
        Some(Commands::Add { name, phone }) => cmd_add(&mut book, &mut out, &name, &phone),
        Some(Commands::Delete { name }) => cmd_delete(&mut book, &mut out, &name),
        Some(Commands::Modify { name, phone }) => cmd_modify(&mut book, &mut out, &name, &phone),
        Some(Commands::Search { query, field }) => {
            cmd_search(&book, &mut out, &query, field, json_mode)
        }
        Some(Commands::List { descending }) => cmd_list(&book, &mut out, descending, json_mode),
        Some(Commands::Status) => cmd_status(&book, &mut out, json_mode),
        Some(Commands::Menu) | None => {
            let stdin = std::io::stdin();
            run_menu(&mut book, &mut stdin.lock(), &mut out)
        }
    };

    match outcome {
        Ok(()) => book.close(),
        // The failed flush is already logged
        Err(e @ PhonebookError::StorageUnavailable { .. }) => {
            book.mark_clean();
            Err(e)
        }
        Err(e) => {
            // Flush errors are logged by the session; the command error wins
            let _ = book.close();
            Err(e)
        }
    }
}
