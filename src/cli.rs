use crate::config::SweepConfig;
use crate::constants::DATE_HELP_TEXT;
use crate::downloader::run_sweep;
use crate::errors::{AppError, AppResult};
use clap::{Arg, ArgAction, Command};
use std::path::{Path, PathBuf};
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Parses command-line arguments and executes the download sweep.
///
/// This function handles two subcommands:
/// - `cli`: Save directory and dates given as flags
/// - `toml`: Save directory and dates read from a TOML configuration file
///
/// Both subcommands run the same sweep: for every requested date, each
/// time-of-day slot and its product types are fetched in turn, and every
/// GRIB2 file linked from the matching listing pages is downloaded.
///
/// # Returns
///
/// Returns `Ok(())` once the sweep has been attempted for every date.
/// Individual fetch failures are logged and do not fail the run; an error is
/// returned only for environmental faults such as an unreadable config file
/// or an unwritable save directory.
pub async fn cli() -> AppResult<()> {
    let cmd = Command::new("ecmwf-cli")
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("cli")
                .about("Download forecast files for one or more dates")
                .after_help("Example:\n  ecmwf-cli cli -s data/forecasts -d 20240311 20240312")
                .arg(
                    Arg::new("save")
                        .short('s')
                        .long("save")
                        .help("Base directory to save the files")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("date")
                        .short('d')
                        .long("date")
                        .help(DATE_HELP_TEXT)
                        .required(true)
                        .multiple_values(true)
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("toml")
                .about("Run using a TOML configuration file")
                .arg(
                    Arg::new("config")
                        .help("Path to the TOML config file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        );

    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    match matches.subcommand() {
        Some(("cli", sub)) => {
            let save_dir = sub
                .get_one::<PathBuf>("save")
                .expect("save is required")
                .clone();
            let dates: Vec<String> = sub
                .get_many::<String>("date")
                .expect("date is required")
                .cloned()
                .collect();

            run_workflow(&dates, &save_dir).await?;
        }
        Some(("toml", sub)) => {
            let config_path = sub
                .get_one::<PathBuf>("config")
                .expect("config is required");

            let config = SweepConfig::from_toml_file(config_path)?;
            run_workflow(&config.dates, &config.save).await?;
        }
        _ => {
            cmd_for_help
                .print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
        }
    }

    Ok(())
}

async fn run_workflow(dates: &[String], save_dir: &Path) -> AppResult<()> {
    info!(
        dates = dates.len(),
        save_dir = %save_dir.display(),
        "Starting forecast sweep"
    );

    let client = reqwest::Client::new();
    run_sweep(&client, dates, save_dir).await?;

    info!(dates = dates.len(), "Sweep completed");
    Ok(())
}
