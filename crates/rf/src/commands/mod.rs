//! Command implementations for the rf CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod check;
pub mod config;
pub mod key;
pub mod parse;
pub mod rows;
pub mod scan;

use crate::cli::Cli;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Filter parsing error.
    #[error("filter error: {0}")]
    Filter(#[from] rowfilter_rs::FilterSyntaxError),

    /// A row that cannot be turned into cells.
    #[error("invalid row at line {line}: {message}")]
    InvalidRow {
        /// 1-based input line.
        line: usize,
        /// What is wrong with it.
        message: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    /// Short machine-readable code for JSON error output.
    pub fn code(&self) -> &'static str {
        match self {
            CommandError::Filter(_) => "FILTER_ERROR",
            CommandError::InvalidRow { .. } => "INVALID_ROW",
            CommandError::Config(_) => "CONFIG_ERROR",
            CommandError::Io(_) => "IO_ERROR",
            CommandError::Json(_) => "JSON_ERROR",
        }
    }

    /// Process exit code: 1 for bad filters or config, 2 for bad input data.
    pub fn exit_code(&self) -> u8 {
        match self {
            CommandError::Filter(_) | CommandError::Config(_) => 1,
            CommandError::InvalidRow { .. } | CommandError::Io(_) | CommandError::Json(_) => 2,
        }
    }

    /// Creates an invalid row error.
    pub fn invalid_row(line: usize, message: impl Into<String>) -> Self {
        CommandError::InvalidRow {
            line,
            message: message.into(),
        }
    }
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Field holding the row identifier in scanned rows.
    pub key_column: String,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and the loaded config.
    /// Flags win over config values.
    pub fn new(cli: &Cli, config: &Config) -> Self {
        let color_enabled = config.output.color.unwrap_or(true)
            && std::env::var_os("NO_COLOR").is_none();

        Self {
            json_output: cli.json || config.output.json.unwrap_or(false),
            use_colors: !cli.no_color && color_enabled,
            quiet: cli.quiet,
            key_column: config.key_column().to_string(),
        }
    }
}
