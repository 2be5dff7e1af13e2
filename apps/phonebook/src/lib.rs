//! # Phonebook
//!
//! Library half of the phonebook binary: CLI definitions, command
//! implementations, the interactive menu and configuration loading.
//! `main.rs` only initialises logging and hands over to [`cli::execute`].

pub mod cli;
pub mod config;
