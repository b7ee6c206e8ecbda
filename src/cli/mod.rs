//! Command-line interface: one-shot commands driving the same flows as the
//! TUI.

pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tinydash",
    about = "Terminal dashboard and CLI client for a TinyLink short-link registry",
    long_about = "Run without a subcommand to open the interactive dashboard."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List links, optionally filtered by a search query
    List {
        /// Case-insensitive substring match over code and target URL
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a short link
    Add {
        /// Absolute target URL
        target_url: String,
        /// Custom code (6-8 alphanumeric); omit to let the registry generate one
        #[arg(long)]
        code: Option<String>,
    },
    /// Delete a link (asks for confirmation unless --yes)
    Delete {
        code: String,
        /// Skip the interactive confirmation
        #[arg(long)]
        yes: bool,
    },
    /// Show statistics for one link
    Stats { code: String },
    /// Resolve a short code to its target
    Resolve { code: String },
    /// Show registry health
    Health,
}

#[derive(Debug)]
pub enum CliError {
    CommandError(String),
    /// The failure was already shown through the notification sink; exit
    /// non-zero without printing again.
    Reported,
}

impl CliError {
    pub fn format_simple(&self) -> Option<String> {
        match self {
            CliError::CommandError(msg) => Some(format!("Error: {}", msg)),
            CliError::Reported => None,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::CommandError(msg) => write!(f, "Error: {}", msg),
            CliError::Reported => write!(f, "command failed"),
        }
    }
}

impl std::error::Error for CliError {}
