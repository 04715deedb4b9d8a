//! Standalone validator for override files.
//!
//! Checks a dotenv file against the declared configuration sections:
//! every value must parse as its setting's type, and every key should
//! belong to some section.

use std::process::ExitCode;

use clap::Parser;

use guild_bot_config::config::{EnvFile, Origin, OverrideSources, Settings};

/// Override file validator.
#[derive(Parser, Debug)]
#[command(name = "validate_env")]
#[command(about = "Validates .env override files for the guild bot")]
#[command(version)]
struct Args {
    /// Path to the override file to validate.
    #[arg(short, long, default_value = ".env")]
    file: String,

    /// Treat unrecognised keys as errors instead of warnings.
    #[arg(long)]
    strict: bool,

    /// Write a file containing every default value to the specified path.
    #[arg(long)]
    generate_defaults: Option<String>,

    /// Show every overridden key, not just failures.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Handle defaults generation
    if let Some(output_path) = args.generate_defaults {
        return generate_defaults(&output_path);
    }

    validate_file(&args.file, args.strict, args.verbose)
}

fn generate_defaults(output_path: &str) -> ExitCode {
    let defaults = Settings::defaults();

    match std::fs::write(output_path, defaults.to_env_string()) {
        Ok(()) => {
            println!("✓ Default configuration written to: {output_path}");
            println!("\nRemove the keys you do not want to override.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ Failed to write defaults file: {e}");
            ExitCode::FAILURE
        }
    }
}

fn validate_file(path: &str, strict: bool, verbose: bool) -> ExitCode {
    println!("Validating: {path}\n");

    // Only the file is checked; the process environment is left out
    let mut sources = OverrideSources::new();
    if let Err(e) = sources.add_file(&EnvFile::required(path)) {
        eprintln!("✗ Failed to read override file: {e}");
        return ExitCode::FAILURE;
    }

    let results = Settings::validate_sources(&sources);

    let mut errors = 0;
    let mut overridden = 0;

    for (key, result) in &results {
        match result {
            Ok(Origin::Default) => {}
            Ok(_) => {
                overridden += 1;
                if verbose {
                    println!("  ✓ {key}");
                }
            }
            Err(e) => {
                errors += 1;
                println!("  ✗ Error: {e}");
            }
        }
    }

    let unknown = Settings::unknown_file_keys(&sources);
    for (_, key) in &unknown {
        if strict {
            println!("  ✗ Error: unrecognised key {key}");
        } else {
            println!("  ⚠ Warning: unrecognised key {key} is ignored");
        }
    }
    if strict {
        errors += unknown.len();
    }

    println!();

    if errors == 0 {
        println!("✓ {overridden} setting(s) overridden, all values valid!");
        if !unknown.is_empty() {
            println!("  ({} warning(s) - unrecognised keys)", unknown.len());
        }
        ExitCode::SUCCESS
    } else {
        println!("✗ Validation failed: {errors} error(s)");
        ExitCode::FAILURE
    }
}
