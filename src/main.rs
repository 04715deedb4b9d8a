//! Guild Bot Config - Main Entry Point
//!
//! Loads the bot configuration the same way the bot does at startup and
//! prints the result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use guild_bot_config::config::{LoadOptions, LoadReport, Settings};

/// Output format for `--dump`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DumpFormat {
    /// Dotenv lines, loadable as an override file.
    Env,
    /// Pretty-printed JSON with secrets masked.
    Json,
}

/// Load and inspect the guild bot configuration.
#[derive(Parser, Debug)]
#[command(name = "bot_config")]
#[command(about = "Resolve the guild bot configuration from defaults, .env files and the environment")]
#[command(version)]
struct Args {
    /// Override files, lowest priority first.
    #[arg(long = "env-file", default_values = [".env", ".env.server"])]
    env_files: Vec<PathBuf>,

    /// Fail if any override file is missing.
    #[arg(long)]
    require_env_files: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Print the resolved configuration.
    #[arg(long, value_enum)]
    dump: Option<DumpFormat>,

    /// List every overridden key and where its value came from.
    #[arg(long)]
    explain: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args.log_level);

    let options = LoadOptions::with_env_files(args.env_files, args.require_env_files);

    let (settings, report) =
        Settings::load_with_report(&options).context("Failed to load configuration")?;

    if report.files_read == 0 {
        warn!("No override files found, using defaults and environment only");
    }

    info!(
        "Guild {} (git sha: {}, debug: {})",
        settings.guild.id, settings.git_sha, settings.miscellaneous.debug
    );

    if args.explain {
        print_overrides(&report);
    }

    match args.dump {
        Some(DumpFormat::Env) => print!("{}", settings.to_env_string()),
        Some(DumpFormat::Json) => {
            let json = serde_json::to_string_pretty(&settings)
                .context("Failed to serialize configuration")?;
            println!("{json}");
        }
        None => {}
    }

    Ok(())
}

/// Initializes the logging subsystem.
fn init_logging(level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Prints overridden keys grouped by source.
fn print_overrides(report: &LoadReport) {
    let count = report.override_count();
    if count == 0 {
        println!("No overrides applied.");
        return;
    }

    println!("{count} override(s) applied:");
    for (section, field) in report.overrides() {
        println!("  [{section}] {} <- {}", field.key, field.origin);
    }
}
