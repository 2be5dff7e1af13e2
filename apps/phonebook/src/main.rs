//! # Phonebook
//!
//! The main binary for the ordered contact directory.
//!
//! This application provides:
//! - One-shot CLI commands (add, delete, modify, search, list, status)
//! - The interactive numbered menu
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 apps/phonebook (THE BINARY)              │
//! │                                                          │
//! │   ┌─────────────┐    ┌──────────────┐    ┌───────────┐   │
//! │   │    CLI      │    │ Interactive  │    │  Config   │   │
//! │   │   (clap)    │    │    Menu      │    │  (toml)   │   │
//! │   └──────┬──────┘    └──────┬───────┘    └─────┬─────┘   │
//! │          └──────────────────┼──────────────────┘         │
//! │                             ▼                            │
//! │                   ┌──────────────────┐                   │
//! │                   │  phonebook-core  │                   │
//! │                   │   (THE ENGINE)   │                   │
//! │                   └──────────────────┘                   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Interactive menu
//! phonebook
//!
//! # CLI operations
//! phonebook add -n Alice -p 11234
//! phonebook search 123 --field phone
//! phonebook list --descending --json-mode
//! ```

use clap::Parser;
use phonebook::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments first: --verbose decides the default log level
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    if !cli.quiet && cli.is_interactive() {
        print_banner();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing. PHONEBOOK_LOG_FORMAT=json enables machine-parseable output.
///
/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("PHONEBOOK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose {
        "phonebook=debug,phonebook_core=debug"
    } else {
        "phonebook=warn,phonebook_core=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  ┌─┐┬ ┬┌─┐┌┐┌┌─┐┌┐ ┌─┐┌─┐┬┌─
  ├─┘├─┤│ ││││├┤ ├┴┐│ ││ │├┴┐
  ┴  ┴ ┴└─┘┘└┘└─┘└─┘└─┘└─┘┴ ┴

  Phonebook v{}

  Sorted • Searchable • Saved
"#,
        env!("CARGO_PKG_VERSION")
    );
}
