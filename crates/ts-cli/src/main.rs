use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ts_cli::commands::{clean, lookup, stats, trend, util};
use ts_cli::{Cli, Commands, Config};
use ts_core::CleanPattern;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::Stats { files, json }) => {
            stats::run(&mut stdout, files, *json, config.precision)?;
        }
        Some(Commands::ValueAt { file, time }) => {
            let series = util::load_series(file)?;
            lookup::value_at(&mut stdout, &series, *time, config.precision)?;
        }
        Some(Commands::Values { file, raw }) => {
            let series = util::load_series(file)?;
            lookup::values(&mut stdout, &series, *raw, config.precision)?;
        }
        Some(Commands::Clean {
            file,
            pattern,
            in_place,
        }) => {
            let pattern: CleanPattern = pattern
                .as_deref()
                .unwrap_or(&config.clean_pattern)
                .parse()?;
            clean::run(&mut stdout, file, pattern, *in_place)?;
        }
        Some(Commands::Trend { file, from, to }) => {
            let series = util::load_series(file)?;
            trend::run(&mut stdout, &series, *from, *to, config.precision)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}
