//! Table types.

use super::run::runs_text;
use super::{Alignment, Run};
use serde::{Deserialize, Serialize};

/// A table parsed from pipe-delimited markdown lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header row
    pub header: TableRow,

    /// Per-column alignment, taken from the alignment row
    pub alignments: Vec<Alignment>,

    /// Data rows (non-header)
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a table from its header, alignments and data rows.
    pub fn new(header: TableRow, alignments: Vec<Alignment>, rows: Vec<TableRow>) -> Self {
        Self {
            header,
            alignments,
            rows,
        }
    }

    /// Alignment of the given column. Columns beyond the alignment row are left aligned.
    pub fn alignment_at(&self, column: usize) -> Alignment {
        self.alignments.get(column).copied().unwrap_or_default()
    }

    /// Get the number of rows, header included.
    pub fn row_count(&self) -> usize {
        1 + self.rows.len()
    }

    /// Get the number of columns declared by the alignment row.
    pub fn column_count(&self) -> usize {
        self.alignments.len()
    }

    /// Iterate over all rows, header first.
    pub fn all_rows(&self) -> impl Iterator<Item = &TableRow> {
        std::iter::once(&self.header).chain(self.rows.iter())
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.all_rows()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<Cell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Create a row of unstyled cells from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(Cell::text).collect())
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Cell text runs
    pub runs: Vec<Run>,
}

impl Cell {
    /// Create a cell from runs.
    pub fn new(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    /// Create a cell with unstyled text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![Run::plain(text)])
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        runs_text(&self.runs)
    }
}
