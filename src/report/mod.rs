//! Report rendering.
//!
//! Rows reach the renderers through the `ReportSink` trait, one `SiteReport`
//! per configured hostname in input order:
//! - `ConsoleSink` prints each row as it arrives
//! - `MarkdownSink` buffers rows and writes `results.md` at the end

mod cells;
mod console;
mod markdown;

use std::io;

use crate::probe::SiteReport;

pub use cells::{describe_status, hsts_cell, row_cells, status_cell, Cell, RowCells, Tone};
pub use console::ConsoleSink;
pub use markdown::MarkdownSink;

/// Destination for report rows.
pub trait ReportSink {
    /// Called once before the first row.
    fn begin(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Called once per site, in input order.
    fn add_row(&mut self, report: &SiteReport) -> io::Result<()>;

    /// Called once after the last row.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
