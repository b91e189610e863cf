//! Configuration constants.
//!
//! This module defines the defaults and fixed values used throughout the
//! application: timeouts, file names, report text and column widths.

use std::time::Duration;

/// Settings file read when `--settings` is not given.
pub const DEFAULT_SETTINGS_PATH: &str = "appsettings.json";
/// Markdown report written when `--output` is not given.
pub const DEFAULT_OUTPUT_PATH: &str = "results.md";

// Network operation timeouts
/// Per-request timeout in seconds (covers DNS, connect, TLS and response headers)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout
/// Kept below the request timeout so unroutable hosts fail fast.
pub const TCP_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Sites probed at once. One keeps the run strictly sequential.
pub const DEFAULT_MAX_CONCURRENCY: usize = 1;

/// Default User-Agent string for probe requests.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Response header carrying the HSTS policy.
pub const HSTS_HEADER: &str = "strict-transport-security";
/// Prefix stripped from the HSTS header value.
pub const MAX_AGE_PREFIX: &str = "max-age=";

// Report text
/// Heading of the console table and the Markdown report.
pub const REPORT_TITLE: &str = "Testing Website Protocol Headers";
/// Legend line printed under the heading.
pub const REPORT_LEGEND: &str = "Valid Status Code is \"Moved\".";
/// Status name shown for a valid permanent redirect, as named by the legend.
pub const MOVED_STATUS_NAME: &str = "Moved";
/// Hostname column header.
pub const COLUMN_URL: &str = "URL Tested";
/// Redirect column header.
pub const COLUMN_STATUS: &str = "HTTP Status Code";
/// HSTS column header.
pub const COLUMN_HSTS: &str = "HSTS Value";

// Markdown column widths (content longer than the width is not truncated)
/// Left-justified hostname column.
pub const MARKDOWN_URL_WIDTH: usize = 22;
/// Left-justified redirect column.
pub const MARKDOWN_STATUS_WIDTH: usize = 17;
/// Right-aligned HSTS column.
pub const MARKDOWN_HSTS_WIDTH: usize = 10;

// Console table
/// Minimum width of each console column. The header and every live row are
/// printed as separate tables, so they share these widths to line up.
pub const CONSOLE_COLUMN_WIDTHS: [u16; 3] = [24, 32, 10];
