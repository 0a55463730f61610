//! Pipe tables.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::types::{Alignment, Table, TableCell, TableRow};
use crate::parsing::inline::Inline;

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|(\s*:?-+:?\s*\|)+$").expect("table separator pattern is valid")
});

/// A line that starts and ends with `|`.
pub fn is_table_line(line: &str) -> bool {
    let t = line.trim();
    t.len() >= 2 && t.starts_with('|') && t.ends_with('|')
}

/// A `|---|:-:|--:|` row.
pub fn is_separator(line: &str) -> bool {
    SEPARATOR.is_match(line.trim())
}

/// Splits a row on `|` after removing the outer pipes, trimming each cell.
pub fn split_cells(line: &str) -> Vec<&str> {
    let t = line.trim();
    let inner = t.strip_prefix('|').unwrap_or(t);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(str::trim).collect()
}

/// Column alignments from a separator row's colon placement.
pub fn alignments(separator: &str) -> Vec<Alignment> {
    split_cells(separator)
        .into_iter()
        .map(|cell| match (cell.starts_with(':'), cell.ends_with(':')) {
            (true, true) => Alignment::Center,
            (false, true) => Alignment::Right,
            _ => Alignment::Left,
        })
        .collect()
}

/// Builds a table from a run of table lines.
///
/// The first separator that follows at least one row turns every row before
/// it into the header and supplies alignments. Separators are never emitted as data.
/// Rows keep their own cell counts; ragged tables are not an error.
pub fn build_table(lines: &[&str], mut cell: impl FnMut(&str) -> Vec<Inline>) -> Table {
    let mut header: Vec<TableRow> = Vec::new();
    let mut aligns = Vec::new();
    let mut rows: Vec<TableRow> = Vec::new();

    for line in lines {
        if is_separator(line) {
            if header.is_empty() && !rows.is_empty() {
                header = std::mem::take(&mut rows);
                aligns = alignments(line);
            }
            continue;
        }
        let row = split_cells(line)
            .into_iter()
            .map(|raw| TableCell {
                raw: raw.to_string(),
                content: cell(raw),
            })
            .collect();
        rows.push(row);
    }

    Table {
        header,
        alignments: aligns,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(row: &TableRow) -> Vec<&str> {
        row.iter().map(|c| c.raw.as_str()).collect()
    }

    fn build(lines: &[&str]) -> Table {
        build_table(lines, |t| vec![Inline::Text(t.to_string())])
    }

    #[test]
    fn header_alignment_and_body() {
        let table = build(&["| A | B |", "|:--|--:|", "| 1 | 2 |"]);

        assert_eq!(table.header.iter().map(raw).collect::<Vec<_>>(), vec![vec!["A", "B"]]);
        assert_eq!(table.alignments, vec![Alignment::Left, Alignment::Right]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(raw(&table.rows[0]), vec!["1", "2"]);
    }

    #[test]
    fn center_alignment() {
        assert_eq!(
            alignments("|:-:|---|"),
            vec![Alignment::Center, Alignment::Left]
        );
    }

    #[test]
    fn table_without_separator_has_no_header() {
        let table = build(&["| a | b |", "| c | d |"]);
        assert!(table.header.is_empty());
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.alignment(5), Alignment::Left);
    }

    #[test]
    fn leading_separator_is_skipped() {
        let table = build(&["|---|", "| x |"]);
        assert!(table.header.is_empty());
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn every_row_above_the_separator_is_header() {
        let table = build(&["| A |", "| B |", "|---|", "| c |"]);

        assert_eq!(
            table.header.iter().map(raw).collect::<Vec<_>>(),
            vec![vec!["A"], vec!["B"]]
        );
        assert_eq!(table.rows.len(), 1);
        assert_eq!(raw(&table.rows[0]), vec!["c"]);
    }

    #[test]
    fn later_separators_are_dropped() {
        let table = build(&["| A |", "|---|", "| b |", "|:-:|", "| c |"]);

        assert_eq!(table.header.len(), 1);
        assert_eq!(table.alignments, vec![Alignment::Left]);
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn ragged_rows_are_kept() {
        let table = build(&["| a | b |", "|---|---|", "| only |"]);
        assert_eq!(table.rows[0].len(), 1);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn recognises_table_lines() {
        assert!(is_table_line("  | a |  "));
        assert!(!is_table_line("| a"));
        assert!(!is_table_line("|"));
        assert!(is_separator("| --- | :---: |"));
        assert!(!is_separator("| a | b |"));
    }
}
