mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, convert, countries, Context};
use crate::error::{exit_code_for, report_error};
use phonefmt_config as config;

#[derive(Debug, Parser)]
#[command(name = "phonefmt", version, about = "phonefmt CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert ITU-T E.123 numbers to EPP format
    #[command(name = "itu-to-epp")]
    ItuToEpp(convert::ItuToEppArgs),
    /// Reformat national numbers for the first matching country
    Format(convert::FormatArgs),
    /// Convert national numbers to EPP format
    #[command(name = "to-epp")]
    ToEpp(convert::ToEppArgs),
    /// List known countries
    Countries(countries::CountriesArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        Command::ItuToEpp(args) => convert::itu_to_epp(json, args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }
            debug!(countries = app_config.rules.len(), "rule table loaded");

            let ctx = Context {
                json,
                config: &app_config,
            };

            match command {
                Command::Format(args) => convert::format(&ctx, args),
                Command::ToEpp(args) => convert::to_epp(&ctx, args),
                Command::Countries(args) => countries::list_countries(&ctx, args),
                Command::ItuToEpp(_) => {
                    unreachable!("itu-to-epp command handled before config load")
                }
                Command::Completions(_) => {
                    unreachable!("completions command handled before config load")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
