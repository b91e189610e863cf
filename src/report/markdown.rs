//! Markdown report file.

use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::config::{
    COLUMN_HSTS, COLUMN_STATUS, COLUMN_URL, MARKDOWN_HSTS_WIDTH, MARKDOWN_STATUS_WIDTH,
    MARKDOWN_URL_WIDTH, REPORT_LEGEND, REPORT_TITLE,
};
use crate::probe::SiteReport;
use crate::report::cells::row_cells;
use crate::report::ReportSink;

/// Buffers the report as Markdown and writes it to a file on `finish`.
///
/// Nothing touches the file system until `finish`, so a run that aborts
/// leaves no partial report behind.
pub struct MarkdownSink {
    path: PathBuf,
    buffer: String,
}

impl MarkdownSink {
    /// Creates a sink that will write to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let mut buffer = String::new();
        buffer.push_str(&format!("# {REPORT_TITLE}\n\n"));
        buffer.push_str(&format!("{REPORT_LEGEND}\n\n"));
        buffer.push_str(&table_line(COLUMN_URL, COLUMN_STATUS, COLUMN_HSTS, false));
        buffer.push_str(&table_line(
            &"-".repeat(MARKDOWN_URL_WIDTH),
            &"-".repeat(MARKDOWN_STATUS_WIDTH),
            &"-".repeat(MARKDOWN_HSTS_WIDTH),
            false,
        ));
        Self {
            path: path.into(),
            buffer,
        }
    }

    /// Destination file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The Markdown produced so far.
    pub fn contents(&self) -> &str {
        &self.buffer
    }
}

impl ReportSink for MarkdownSink {
    fn add_row(&mut self, report: &SiteReport) -> io::Result<()> {
        let cells = row_cells(report);
        self.buffer
            .push_str(&table_line(&cells.url, &cells.status.text, &cells.hsts.text, true));
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        info!("Writing results to {}", self.path.display());
        std::fs::write(&self.path, &self.buffer)
    }
}

// The header row is left-justified in every column; data rows right-align HSTS.
fn table_line(url: &str, status: &str, hsts: &str, align_hsts_right: bool) -> String {
    if align_hsts_right {
        format!(
            "| {url:<uw$} | {status:<sw$} | {hsts:>hw$} |\n",
            uw = MARKDOWN_URL_WIDTH,
            sw = MARKDOWN_STATUS_WIDTH,
            hw = MARKDOWN_HSTS_WIDTH
        )
    } else {
        format!(
            "| {url:<uw$} | {status:<sw$} | {hsts:<hw$} |\n",
            uw = MARKDOWN_URL_WIDTH,
            sw = MARKDOWN_STATUS_WIDTH,
            hw = MARKDOWN_HSTS_WIDTH
        )
    }
}
