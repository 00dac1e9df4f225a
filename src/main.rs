//! # backup-report
//!
//! Command-line front end for the reporting helpers, meant to be called from
//! shell-based backup scripts.
//!
//! ## Usage
//!
//! ```bash
//! # Size of a backup directory
//! backup-report size /var/backups/db
//!
//! # Scrub a command line before writing it to a log
//! backup-report redact mysqldump --password=secret --all-databases
//!
//! # Compare a source tree with its copy, with timestamps
//! backup-report --date compare /srv/www /mnt/backup/www
//! ```

mod cli;

use std::path::Path;
use std::process::exit;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use backup_report::{
    FileConfig, Importance, Printer, ResultTable,
    redact::{secure, strip_timestamp},
    utils::{calculate_path_size, format_bytes, format_duration, size::EMPTY, size_of},
};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;

/// Entry point for the backup-report application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("{} {err:#}", "Error:".red());

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// Returns errors from configuration validation, filesystem traversal,
/// malformed input lines, or config file creation.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    match &args.command {
        Commands::Config { command } => handle_config_command(command, &args)?,
        Commands::Size { paths } => {
            let printer = build_printer(&args)?;
            for path in paths {
                printer.verbose(&format!("Measuring {}", path.display()));
                printer.info(&format!("{}: {}", path.display(), size_of(path)?));
            }
        }
        Commands::Duration { seconds } => build_printer(&args)?.info(&format_duration(*seconds)),
        Commands::Redact { text } => build_printer(&args)?.info(&secure(&text.join(" "))),
        Commands::StripTimestamp { line } => build_printer(&args)?.info(strip_timestamp(line)?),
        Commands::Compare {
            source,
            destination,
        } => compare(&build_printer(&args)?, source, destination)?,
    }

    Ok(())
}

/// Build the printer from CLI flags layered over the config file.
fn build_printer(args: &Cli) -> Result<Printer> {
    Printer::new(args.printer_config(&load_config()))
}

// ── Compare ─────────────────────────────────────────────────────────────

/// Byte total and display string for a path, as [`size_of`] would show it.
fn measure(path: &Path) -> Result<(u64, String)> {
    let total = calculate_path_size(path)?;
    let display = if total == 0 && !path.is_file() {
        EMPTY.to_string()
    } else {
        format_bytes(total)
    };
    Ok((total, display))
}

/// Print a one-row file backup summary comparing `source` with `destination`.
fn compare(printer: &Printer, source: &Path, destination: &Path) -> Result<()> {
    let started = Instant::now();

    printer.verbose(&format!("Measuring source {}", source.display()));
    let (source_total, source_display) = measure(source)?;

    let (destination_display, status) = if destination.exists() {
        printer.verbose(&format!("Measuring destination {}", destination.display()));
        let (destination_total, display) = measure(destination)?;
        let status = if destination_total == source_total {
            "OK"
        } else {
            "MISMATCH"
        };
        (display, status)
    } else {
        ("-".to_string(), "MISSING")
    };

    let mut table = ResultTable::file_backup();
    table.add_row([
        source.display().to_string(),
        source_display,
        destination_display,
        status.to_string(),
    ]);

    if printer.should_emit(Importance::Normal) {
        table.print();
    } else if status != "OK" {
        printer.always(&format!("{}: {status}", source.display()));
    }

    printer.info(&format_duration(started.elapsed().as_secs()));
    Ok(())
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# backup-report configuration
# All values shown are their defaults. Uncomment and change as needed.

[output]
# Print every message, including detailed progress (overrides quiet)
# verbose = false

# Only print messages that must always be shown
# quiet = false

# Prefix each line with the current local time
# date = false

# strftime pattern for the timestamp prefix, including the separator
# date_format = "[%Y-%m-%d %H:%M:%S] "
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand, args: &Cli) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config(args)?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective output configuration (CLI > file > defaults).
fn show_config(args: &Cli) -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    let effective = args.printer_config(&config);
    println!();
    println!(
        "\
[output]
verbose     = {}
quiet       = {}
date        = {}
date_format = {:?}",
        effective.verbose, effective.quiet, effective.date, effective.date_format
    );
    Ok(())
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    write_template(&path)
        .with_context(|| format!("Failed to create config file {}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Create the parent directory if needed and write [`CONFIG_TEMPLATE`].
fn write_template(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("could not create config directory")?;
    }
    std::fs::write(path, CONFIG_TEMPLATE).context("could not write file")?;
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config() -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e:#}", "Warning: Failed to load config file:".yellow());
            FileConfig::default()
        }
    }
}
