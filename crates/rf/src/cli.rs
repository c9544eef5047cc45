//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the rf CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// rf - Evaluate single-column-value row filters
#[derive(Parser, Debug)]
#[command(name = "rf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a filter expression and show its parts
    #[command(alias = "p")]
    Parse {
        /// Filter expression, e.g. "SingleColumnValueFilter('a', 'count', >=, 'binary:4')"
        filter: String,
    },

    /// Evaluate a filter against a single row
    #[command(alias = "c")]
    Check {
        /// Filter expression
        filter: String,

        /// Row as a JSON object of "family:qualifier" to value
        #[arg(short, long)]
        row: String,
    },

    /// Evaluate a filter against JSON-lines rows and print the matching keys
    #[command(alias = "s")]
    Scan {
        /// Filter expression
        filter: String,

        /// JSON-lines input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Field holding the row identifier (default: from config, then "key")
        #[arg(long)]
        key_column: Option<String>,
    },

    /// Normalize a row identifier into its lookup key
    #[command(alias = "k")]
    Key {
        /// Row identifier
        id: String,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Show config file path
    Path,
}
