//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! categories network failures are sorted into.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors raised while building a probe target.
///
/// These indicate a malformed hostname reaching the prober. They are never
/// turned into report rows; they abort the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The constructed URL failed validation.
    #[error("Invalid URL {url:?}: {reason}")]
    InvalidUrl {
        /// The URL as constructed from the hostname
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Errors reading the site list.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("Failed to read settings file {}: {source}", path.display())]
    Read {
        /// Settings file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The settings file is not valid JSON or `sites` is not a list of strings.
    #[error("Failed to parse settings file {}: {source}", path.display())]
    Parse {
        /// Settings file path
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A `sites` entry is not a bare hostname.
    #[error("Invalid site #{index} {site:?}: {reason}")]
    InvalidSite {
        /// Zero-based position in the `sites` list
        index: usize,
        /// The offending entry
        site: String,
        /// Why it was rejected
        reason: &'static str,
    },
}

/// Categories of network failures that turn into a `Connection error` row.
///
/// Redirects are never followed and HEAD responses carry no body, so only
/// failures up to the response headers are distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ConnectionErrorKind {
    /// Request or connect timeout
    Timeout,
    /// DNS resolution, TCP connect or TLS handshake failure
    Connect,
    /// Request could not be built
    Builder,
    /// Other request error
    Request,
    /// Anything else
    Other,
}

impl std::fmt::Display for ConnectionErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConnectionErrorKind {
    /// Human-readable label used in logs and the run summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionErrorKind::Timeout => "HTTP request timeout error",
            ConnectionErrorKind::Connect => "HTTP request connect error",
            ConnectionErrorKind::Builder => "HTTP request builder error",
            ConnectionErrorKind::Request => "HTTP request error",
            ConnectionErrorKind::Other => "HTTP request other error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_error_display() {
        let err = ProbeError::InvalidUrl {
            url: "http://".to_string(),
            reason: "hostname is empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid URL \"http://\": hostname is empty");
    }

    #[test]
    fn test_invalid_site_display() {
        let err = SettingsError::InvalidSite {
            index: 2,
            site: "https://example.com".to_string(),
            reason: "entry must be a bare hostname",
        };
        assert_eq!(
            err.to_string(),
            "Invalid site #2 \"https://example.com\": entry must be a bare hostname"
        );
    }

    #[test]
    fn test_connection_error_kinds() {
        use strum::IntoEnumIterator;
        let kinds: Vec<ConnectionErrorKind> = ConnectionErrorKind::iter().collect();
        assert_eq!(
            kinds,
            vec![
                ConnectionErrorKind::Timeout,
                ConnectionErrorKind::Connect,
                ConnectionErrorKind::Builder,
                ConnectionErrorKind::Request,
                ConnectionErrorKind::Other,
            ]
        );
    }

    #[test]
    fn test_connection_error_kind_display_matches_as_str() {
        use strum::IntoEnumIterator;
        for kind in ConnectionErrorKind::iter() {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }
}
