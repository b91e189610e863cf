//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `hsts_probe` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::process;

use hsts_probe::config::Opt;
use hsts_probe::initialization::init_logger_with;
use hsts_probe::{run_audit, AuditOutcome, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_audit(config).await {
        Ok(AuditOutcome::NoSites { settings_path }) => {
            println!(
                "{}",
                format!(
                    "Provide a list of websites in the {} file.",
                    settings_path.display()
                )
                .red()
            );
            Ok(())
        }
        Ok(AuditOutcome::Completed(report)) => {
            println!(
                "✅ Probed {} site{} ({} valid redirect{}, {} with HSTS, {} connection error{}) in {:.1}s",
                report.total_sites,
                if report.total_sites == 1 { "" } else { "s" },
                report.valid_redirects,
                if report.valid_redirects == 1 { "" } else { "s" },
                report.hsts_present,
                report.connection_errors,
                if report.connection_errors == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            if let Some(path) = report.output_path {
                println!("💾 Results written to \"{}\"", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("hsts_probe error: {:#}", e);
            process::exit(1);
        }
    }
}
