//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENCY, DEFAULT_OUTPUT_PATH, DEFAULT_SETTINGS_PATH, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How a network failure in one of a site's two probes is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ErrorMode {
    /// A failure in either probe turns the whole row into a connection error.
    /// The HSTS probe is skipped once the redirect probe has failed.
    Coalesced,
    /// Each column keeps its own outcome.
    Independent,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use hsts_probe::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     settings_path: PathBuf::from("sites.json"),
///     max_concurrency: 4,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON settings file holding the `sites` list
    pub settings_path: PathBuf,

    /// Markdown report path, `None` for console output only
    pub output_path: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Maximum number of sites probed at once
    pub max_concurrency: usize,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// How network failures are folded into report rows
    pub error_mode: ErrorMode,

    /// Colorize the console table
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
            output_path: Some(PathBuf::from(DEFAULT_OUTPUT_PATH)),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            error_mode: ErrorMode::Coalesced,
            color: true,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Probe the sites listed in ./appsettings.json, write ./results.md
/// hsts_probe
///
/// # Console only, four sites at a time
/// hsts_probe --settings sites.json --no-file --max-concurrency 4
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "hsts_probe",
    about = "Checks hostnames for an HTTP-to-HTTPS permanent redirect and an HSTS header."
)]
pub struct Opt {
    /// JSON settings file with a `sites` list
    #[arg(long, value_parser, default_value = DEFAULT_SETTINGS_PATH)]
    pub settings: PathBuf,

    /// Markdown report path
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Print the console table only, do not write the Markdown report
    #[arg(long)]
    pub no_file: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Maximum number of sites probed at once (1 = sequential)
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY, value_parser = clap::value_parser!(usize))]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Network failure reporting: coalesced|independent
    #[arg(long, value_enum, default_value_t = ErrorMode::Coalesced)]
    pub error_mode: ErrorMode,

    /// Disable colors in the console table
    #[arg(long)]
    pub no_color: bool,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            settings_path: opt.settings,
            output_path: (!opt.no_file).then_some(opt.output),
            log_level: opt.log_level,
            log_format: opt.log_format,
            max_concurrency: opt.max_concurrency.max(1),
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
            error_mode: opt.error_mode,
            color: !opt.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.settings_path, PathBuf::from("appsettings.json"));
        assert_eq!(config.output_path, Some(PathBuf::from("results.md")));
        assert_eq!(config.max_concurrency, 1);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.error_mode, ErrorMode::Coalesced);
        assert!(config.color);
    }

    #[test]
    fn test_opt_defaults_match_config_default() {
        let opt = Opt::parse_from(["hsts_probe"]);
        let config = Config::from(opt);
        let default = Config::default();
        assert_eq!(config.settings_path, default.settings_path);
        assert_eq!(config.output_path, default.output_path);
        assert_eq!(config.max_concurrency, default.max_concurrency);
        assert_eq!(config.timeout_seconds, default.timeout_seconds);
        assert_eq!(config.user_agent, default.user_agent);
        assert_eq!(config.error_mode, default.error_mode);
    }

    #[test]
    fn test_opt_no_file_drops_output() {
        let opt = Opt::parse_from(["hsts_probe", "--no-file", "--output", "out.md"]);
        assert_eq!(Config::from(opt).output_path, None);
    }

    #[test]
    fn test_opt_zero_concurrency_is_sequential() {
        let opt = Opt::parse_from(["hsts_probe", "--max-concurrency", "0"]);
        assert_eq!(Config::from(opt).max_concurrency, 1);
    }

    #[test]
    fn test_opt_independent_error_mode() {
        let opt = Opt::parse_from(["hsts_probe", "--error-mode", "independent", "--no-color"]);
        let config = Config::from(opt);
        assert_eq!(config.error_mode, ErrorMode::Independent);
        assert!(!config.color);
    }
}
