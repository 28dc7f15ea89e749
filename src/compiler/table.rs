//! Pipe table parsing.

use super::parse_inline;
use crate::model::{Alignment, Cell, Table, TableRow};

/// Fewest buffered lines that make a table: a header and an alignment row.
pub const MIN_TABLE_LINES: usize = 2;

/// Check if a trimmed line belongs to a pipe table.
pub fn is_table_line(line: &str) -> bool {
    line.starts_with('|') && line.ends_with('|')
}

/// Split a row on `|`, dropping cells that are empty after trimming.
///
/// Empty interior cells are dropped too, so a row with a blank cell comes
/// out shorter than the alignment row.
fn split_cells(line: &str) -> impl Iterator<Item = &str> {
    line.split('|').map(str::trim).filter(|cell| !cell.is_empty())
}

fn column_alignment(cell: &str) -> Alignment {
    if cell.starts_with(':') && cell.ends_with(':') {
        Alignment::Center
    } else if cell.ends_with(':') {
        Alignment::Right
    } else {
        Alignment::Left
    }
}

fn parse_row(line: &str) -> TableRow {
    TableRow::new(split_cells(line).map(|cell| Cell::new(parse_inline(cell))).collect())
}

/// Parse buffered table lines into a [`Table`].
///
/// The first line is the header, the second the alignment row, and any
/// further lines are data rows. The alignment row is never checked for
/// dashes. Returns `None` when fewer than [`MIN_TABLE_LINES`] lines are
/// given.
pub fn parse_table<S: AsRef<str>>(lines: &[S]) -> Option<Table> {
    let [header, alignment, rows @ ..] = lines else {
        return None;
    };

    let alignments: Vec<Alignment> = split_cells(alignment.as_ref())
        .map(column_alignment)
        .collect();
    let header = parse_row(header.as_ref());
    let rows: Vec<TableRow> = rows.iter().map(|line| parse_row(line.as_ref())).collect();

    for row in std::iter::once(&header).chain(rows.iter()) {
        if row.cells.len() != alignments.len() {
            log::warn!(
                "Table row has {} cells but alignment row declares {} columns",
                row.cells.len(),
                alignments.len()
            );
        }
    }

    Some(Table::new(header, alignments, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Run;

    #[test]
    fn test_is_table_line() {
        assert!(is_table_line("|a|b|"));
        assert!(is_table_line("|"));
        assert!(!is_table_line("a|b"));
        assert!(!is_table_line("|a|b"));
    }

    #[test]
    fn test_parse_simple_table() {
        let table = parse_table(&["|H1|H2|", "|:--|--:|", "|x|y|"]).unwrap();

        assert_eq!(table.alignments, vec![Alignment::Left, Alignment::Right]);
        assert_eq!(table.header, TableRow::from_strings(["H1", "H2"]));
        assert_eq!(table.rows, vec![TableRow::from_strings(["x", "y"])]);
    }

    #[test]
    fn test_column_alignments() {
        let table = parse_table(&["| a | b | c |", "| :---: | ---: | --- |"]).unwrap();
        assert_eq!(
            table.alignments,
            vec![Alignment::Center, Alignment::Right, Alignment::Left]
        );
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_too_few_lines() {
        assert!(parse_table(&["|H1|H2|"]).is_none());
        assert!(parse_table::<&str>(&[]).is_none());
    }

    #[test]
    fn test_empty_interior_cell_dropped() {
        let table = parse_table(&["|a|b|c|", "|--|--|--|", "|x||z|"]).unwrap();
        assert_eq!(table.rows[0], TableRow::from_strings(["x", "z"]));
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn test_cells_parse_emphasis() {
        let table = parse_table(&["|**Name**|Note|", "|---|---|", "|Anna|*ny*|"]).unwrap();
        assert_eq!(table.header.cells[0].runs, vec![Run::bold("Name")]);
        assert_eq!(table.rows[0].cells[1].runs, vec![Run::italic("ny")]);
    }
}
