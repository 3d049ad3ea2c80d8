use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod logging;
mod output;
mod zone;

use cli::{Cli, Commands, ConfigCommands};
use commands::config::{load_config, ConfigSetOptions};
use commands::dates::DatesOptions;
use commands::search::SearchOptions;
use commands::{CommandContext, CommandError};
use ridesearch_core::FeedError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(json) => eprintln!("{json}"),
                    Err(_) => eprintln!("Error: {e}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

async fn run(cli: &Cli) -> commands::Result<()> {
    // Completions and config management work even with a broken config file.
    match &cli.command {
        Some(Commands::Completions { shell }) => {
            return Ok(commands::completions::execute(shell)?);
        }
        Some(Commands::Config { command }) => {
            let ctx = CommandContext::from_cli(cli, None);
            return match command {
                None | Some(ConfigCommands::Show) => commands::config::execute_show(&ctx),
                Some(ConfigCommands::Path) => commands::config::execute_path(&ctx),
                Some(ConfigCommands::Set { key, value }) => {
                    let opts = ConfigSetOptions {
                        key: key.clone(),
                        value: value.clone(),
                    };
                    commands::config::execute_set(&ctx, &opts)
                }
            };
        }
        _ => {}
    }

    let config = load_config()?;
    let ctx = CommandContext::from_cli(cli, config.output.color);

    match &cli.command {
        Some(Commands::Search {
            feed,
            sample,
            ride_type,
            date,
            keywords,
            tz,
            limit,
        }) => {
            let opts = SearchOptions {
                feed: feed.clone(),
                sample: *sample,
                intent: (*ride_type).into(),
                date: date.clone(),
                keywords: keywords.clone(),
                tz: tz.clone(),
                limit: *limit,
            };
            commands::search::execute(&ctx, &opts, &config).await
        }
        Some(Commands::Dates { text, at, tz }) => {
            let opts = DatesOptions {
                text: text.clone(),
                at: at.clone(),
                tz: tz.clone(),
            };
            commands::dates::execute(&ctx, &opts, config.output.timezone.as_deref())
        }
        Some(Commands::Completions { .. }) | Some(Commands::Config { .. }) => Ok(()),
        None => {
            if !cli.quiet {
                println!("Try 'ridesearch search --sample' or 'ridesearch --help'.");
            }
            Ok(())
        }
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Feed(FeedError::ReadError { .. }) => "FEED_READ_ERROR",
        CommandError::Feed(_) => "FEED_PARSE_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::Feed(FeedError::ReadError { .. }) => ExitCode::from(3),
        CommandError::Feed(_) => ExitCode::from(4),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Json(_) => ExitCode::from(1),
    }
}
