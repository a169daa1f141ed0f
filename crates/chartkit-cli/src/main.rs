//! chartkit CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use chartkit_cli::cli::{Cli, Command, ConfigAction};
use chartkit_cli::commands;
use chartkit_cli::config::ChartConfig;
use chartkit_cli::error::CliResult;
use chartkit_core::{TracingConfig, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    init_tracing(if cli.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::default()
    })?;

    let config_path = cli.config.clone().unwrap_or_else(ChartConfig::default_path);
    let config = ChartConfig::load_checked(cli.config.as_deref())?;

    match cli.command {
        Command::Interval {
            range,
            high_fidelity,
            json,
        } => {
            println!(
                "{}",
                commands::chart::interval(&config, &range, high_fidelity, json)?
            );
        }
        Command::Minutes { range } => {
            println!("{}", commands::chart::minutes(&config, &range));
        }
        Command::Truncate { value, length } => {
            println!("{}", commands::chart::truncate(&config, &value, length));
        }
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(&config, &config_path)?,
            ConfigAction::Validate => commands::config::validate(&config)?,
            ConfigAction::Path => commands::config::path(&config_path)?,
        },
    }

    Ok(())
}
