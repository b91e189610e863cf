//! Table cell text for a report row.

use reqwest::StatusCode;

use crate::config::MOVED_STATUS_NAME;
use crate::probe::{HstsOutcome, RedirectOutcome, SiteReport};

/// Whether a cell reports a problem. Problem cells are red on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Nothing to flag
    Normal,
    /// Failed check or connection error
    Error,
}

/// Plain text of one cell plus its tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Cell text without any markup
    pub text: String,
    /// How the console renders it
    pub tone: Tone,
}

impl Cell {
    fn normal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Normal,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Error,
        }
    }
}

/// The three cells of a report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCells {
    /// Hostname as configured
    pub url: String,
    /// Redirect probe result
    pub status: Cell,
    /// HSTS probe result
    pub hsts: Cell,
}

/// Builds the cells for one site.
pub fn row_cells(report: &SiteReport) -> RowCells {
    RowCells {
        url: report.hostname().to_string(),
        status: status_cell(report.redirect()),
        hsts: hsts_cell(report.hsts()),
    }
}

/// Cell for the `HTTP Status Code` column.
pub fn status_cell(outcome: &RedirectOutcome) -> Cell {
    match outcome {
        RedirectOutcome::ValidRedirect => {
            Cell::normal(format!("Valid response: \"{MOVED_STATUS_NAME}\""))
        }
        RedirectOutcome::InvalidRedirectTarget(location) => {
            Cell::error(format!("Invalid redirect: \"{location}\""))
        }
        RedirectOutcome::InvalidStatus(status) => {
            Cell::error(format!("Invalid response: \"{}\"", describe_status(*status)))
        }
        RedirectOutcome::ConnectionError => Cell::error("Connection error"),
    }
}

/// Cell for the `HSTS Value` column.
pub fn hsts_cell(outcome: &HstsOutcome) -> Cell {
    match outcome {
        HstsOutcome::Present(value) => Cell::normal(value.clone()),
        HstsOutcome::Absent => Cell::error("None"),
        HstsOutcome::ConnectionError => Cell::normal("N/A"),
    }
}

/// `404 Not Found`, or just the number for unregistered codes.
pub fn describe_status(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::REPORT_LEGEND;

    #[test]
    fn test_valid_redirect_cells() {
        let report = SiteReport::new(
            "example.com",
            RedirectOutcome::ValidRedirect,
            HstsOutcome::Present("63072000".to_string()),
        );
        let cells = row_cells(&report);
        assert_eq!(cells.url, "example.com");
        assert_eq!(
            cells.status,
            Cell::normal("Valid response: \"Moved\"")
        );
        assert_eq!(cells.hsts, Cell::normal("63072000"));
    }

    #[test]
    fn test_invalid_cells_are_errors() {
        assert_eq!(
            status_cell(&RedirectOutcome::InvalidRedirectTarget(
                "https://www.example.com/".to_string()
            )),
            Cell::error("Invalid redirect: \"https://www.example.com/\"")
        );
        assert_eq!(
            status_cell(&RedirectOutcome::InvalidStatus(StatusCode::OK)),
            Cell::error("Invalid response: \"200 OK\"")
        );
        assert_eq!(hsts_cell(&HstsOutcome::Absent), Cell::error("None"));
    }

    #[test]
    fn test_connection_error_cells() {
        let cells = row_cells(&SiteReport::connection_error("down.example"));
        assert_eq!(cells.status, Cell::error("Connection error"));
        assert_eq!(cells.hsts, Cell::normal("N/A"));
    }

    #[test]
    fn test_valid_status_matches_legend() {
        let cell = status_cell(&RedirectOutcome::ValidRedirect);
        assert!(REPORT_LEGEND.contains(&format!("\"{MOVED_STATUS_NAME}\"")));
        assert!(cell.text.contains(&format!("\"{MOVED_STATUS_NAME}\"")));
    }

    #[test]
    fn test_describe_unregistered_status() {
        let status = StatusCode::from_u16(599).expect("valid code");
        assert_eq!(describe_status(status), "599");
    }
}
