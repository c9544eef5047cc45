use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands, ConfigCommands};
use commands::config::load_config;
use commands::scan::ScanOptions;
use commands::{CommandContext, CommandError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": e.code(),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{error_json:#}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the flag-derived level.
fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), CommandError> {
    let config = load_config()?;
    let ctx = CommandContext::new(cli, &config);

    match &cli.command {
        Commands::Parse { filter } => commands::parse::execute(&ctx, filter),
        Commands::Check { filter, row } => commands::check::execute(&ctx, filter, row),
        Commands::Scan {
            filter,
            input,
            key_column,
        } => commands::scan::execute(
            &ctx,
            &ScanOptions {
                filter,
                input: input.as_deref(),
                key_column: key_column.as_deref(),
            },
        ),
        Commands::Key { id } => commands::key::execute(&ctx, id),
        Commands::Config { command } => match command {
            None | Some(ConfigCommands::Show) => commands::config::execute_show(&ctx, &config),
            Some(ConfigCommands::Path) => commands::config::execute_path(&ctx),
        },
    }
}
