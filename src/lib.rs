//! hsts_probe library: HTTPS redirect and HSTS checks for a list of hostnames
//!
//! For every configured hostname the library verifies that:
//! - `http://<host>` answers with a 301 redirect to exactly `https://<host>/`
//! - `https://<host>` advertises a `Strict-Transport-Security` policy
//!
//! Results are rendered as a console table and a Markdown file.
//!
//! # Example
//!
//! ```no_run
//! use hsts_probe::{run_audit, AuditOutcome, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     settings_path: std::path::PathBuf::from("appsettings.json"),
//!     ..Default::default()
//! };
//!
//! if let AuditOutcome::Completed(report) = run_audit(config).await? {
//!     println!("{} of {} sites redirect correctly", report.valid_redirects, report.total_sites);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod probe;
pub mod report;
pub mod settings;

// Re-export public API
pub use config::{Config, ErrorMode, LogFormat, LogLevel};
pub use probe::{HstsOutcome, Prober, RedirectOutcome, SiteReport};
pub use run::{probe_sites, run_audit, AuditOutcome, AuditReport};

// Internal run module (contains the main probing loop)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use futures::stream::{self, StreamExt};
    use log::{info, warn};

    use crate::app::{log_progress, print_error_statistics};
    use crate::config::{Config, ErrorMode};
    use crate::initialization::init_client;
    use crate::probe::{Prober, SiteReport};
    use crate::report::{ConsoleSink, MarkdownSink, ReportSink};
    use crate::settings::load_sites;

    /// Results of a completed run.
    #[derive(Debug, Clone)]
    pub struct AuditReport {
        /// One row per configured hostname, in input order
        pub sites: Vec<SiteReport>,
        /// Number of hostnames probed
        pub total_sites: usize,
        /// Rows with a valid permanent redirect to the HTTPS origin
        pub valid_redirects: usize,
        /// Rows advertising an HSTS policy
        pub hsts_present: usize,
        /// Rows with a network failure in at least one probe
        pub connection_errors: usize,
        /// Markdown report path, `None` when no file was written
        pub output_path: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// How a run ended.
    #[derive(Debug, Clone)]
    pub enum AuditOutcome {
        /// The settings file lists no sites; nothing was probed or written.
        NoSites {
            /// Settings file that was consulted
            settings_path: PathBuf,
        },
        /// Every configured site was probed and reported.
        Completed(AuditReport),
    }

    /// Runs the audit described by `config`.
    ///
    /// Loads the site list, probes each site and streams the rows to the
    /// console and, unless disabled, to the Markdown report.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The settings file cannot be read or parsed
    /// - The HTTP client cannot be initialized
    /// - A probe target URL is malformed
    /// - A report cannot be written
    ///
    /// Unreachable sites are not errors; they appear as `Connection error` rows.
    pub async fn run_audit(config: Config) -> Result<AuditOutcome> {
        let sites = load_sites(&config.settings_path).context("Failed to load site list")?;
        if sites.is_empty() {
            warn!(
                "No sites configured in {}",
                config.settings_path.display()
            );
            return Ok(AuditOutcome::NoSites {
                settings_path: config.settings_path,
            });
        }
        info!("Total sites in settings: {}", sites.len());

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let prober = Prober::new(client);

        let mut console = ConsoleSink::stdout(config.color);
        let mut markdown = config.output_path.as_ref().map(MarkdownSink::new);

        let mut sinks: Vec<&mut dyn ReportSink> = vec![&mut console];
        if let Some(markdown) = markdown.as_mut() {
            sinks.push(markdown);
        }

        let mut report = probe_sites(
            &prober,
            &sites,
            config.max_concurrency,
            config.error_mode,
            &mut sinks,
        )
        .await?;
        drop(sinks);
        report.output_path = markdown.map(|m| m.path().to_path_buf());

        print_error_statistics(prober.stats());
        Ok(AuditOutcome::Completed(report))
    }

    /// Probes `sites` and feeds every row to `sinks`.
    ///
    /// At most `max_concurrency` sites are in flight at once (1 probes strictly
    /// sequentially). Rows are always delivered in the order of `sites`.
    ///
    /// # Errors
    ///
    /// Returns an error if a probe target URL is malformed or a sink fails. In
    /// that case `finish` is not called, so no partial Markdown file is written.
    pub async fn probe_sites(
        prober: &Prober,
        sites: &[String],
        max_concurrency: usize,
        mode: ErrorMode,
        sinks: &mut [&mut dyn ReportSink],
    ) -> Result<AuditReport> {
        let start_time = Instant::now();

        for sink in sinks.iter_mut() {
            sink.begin().context("Failed to start report")?;
        }

        let mut rows = stream::iter(sites)
            .map(move |site| prober.probe_site(site, mode))
            .buffered(max_concurrency.max(1));

        let mut reports = Vec::with_capacity(sites.len());
        while let Some(result) = rows.next().await {
            let site_report = result.context("Invalid probe target")?;
            for sink in sinks.iter_mut() {
                sink.add_row(&site_report)
                    .context("Failed to write report row")?;
            }
            reports.push(site_report);
            log_progress(start_time, reports.len(), sites.len());
        }

        for sink in sinks.iter_mut() {
            sink.finish().context("Failed to finish report")?;
        }

        Ok(AuditReport {
            total_sites: reports.len(),
            valid_redirects: reports.iter().filter(|r| r.redirect().is_valid()).count(),
            hsts_present: reports.iter().filter(|r| r.hsts().is_present()).count(),
            connection_errors: reports.iter().filter(|r| r.has_connection_error()).count(),
            sites: reports,
            output_path: None,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
