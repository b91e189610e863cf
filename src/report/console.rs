//! Live console table rendered with comfy-table.

use std::io::{self, Write};

use colored::*;
use comfy_table::presets::UTF8_NO_BORDERS;
use comfy_table::{
    Attribute, Cell as TableCell, CellAlignment, Color, ColumnConstraint, Table, Width,
};

use crate::config::{
    COLUMN_HSTS, COLUMN_STATUS, COLUMN_URL, CONSOLE_COLUMN_WIDTHS, REPORT_LEGEND, REPORT_TITLE,
};
use crate::probe::SiteReport;
use crate::report::cells::{row_cells, Cell, Tone};
use crate::report::ReportSink;

/// Prints the table row by row as sites complete.
///
/// The header and each row are rendered as their own table so a row shows up
/// as soon as its site is probed. Every table uses the same column widths.
pub struct ConsoleSink<W: Write> {
    out: W,
    color: bool,
}

impl ConsoleSink<io::Stdout> {
    /// Console sink writing to stdout.
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Console sink writing to `out`.
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_NO_BORDERS);
        if !self.color {
            table.force_no_tty();
        }
        table
    }

    fn print(&mut self, mut table: Table) -> io::Result<()> {
        // Constraints only apply to columns that already exist
        table.set_constraints(
            CONSOLE_COLUMN_WIDTHS
                .iter()
                .map(|width| ColumnConstraint::LowerBoundary(Width::Fixed(*width))),
        );
        writeln!(self.out, "{table}")?;
        self.out.flush()
    }
}

fn table_cell(cell: &Cell) -> TableCell {
    let table_cell = TableCell::new(&cell.text);
    match cell.tone {
        Tone::Error => table_cell.fg(Color::Red),
        Tone::Normal => table_cell,
    }
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn begin(&mut self) -> io::Result<()> {
        let title = if self.color {
            REPORT_TITLE.bold().to_string()
        } else {
            REPORT_TITLE.to_string()
        };
        writeln!(self.out)?;
        writeln!(self.out, "{title}")?;
        writeln!(self.out)?;
        writeln!(self.out, "{REPORT_LEGEND}")?;
        writeln!(self.out)?;

        let mut table = self.table();
        table.set_header(
            [COLUMN_URL, COLUMN_STATUS, COLUMN_HSTS]
                .into_iter()
                .map(|heading| TableCell::new(heading).add_attribute(Attribute::Bold)),
        );
        self.print(table)
    }

    fn add_row(&mut self, report: &SiteReport) -> io::Result<()> {
        let cells = row_cells(report);
        let mut table = self.table();
        table.add_row(vec![
            TableCell::new(&cells.url),
            table_cell(&cells.status),
            table_cell(&cells.hsts).set_alignment(CellAlignment::Right),
        ]);
        self.print(table)
    }

    fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}
