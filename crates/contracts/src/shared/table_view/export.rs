//! CSV rendering of table rows for the "Excel" button.
//!
//! The output opens directly in Excel: UTF-8 BOM, `;` separator, one header
//! line with column labels, raw cell text (not rendered views).

use super::{cell_text, ColumnDef, Record};

const SEPARATOR: &str = ";";

/// Builds CSV for `rows` (indices into `records`) in the given order
pub fn to_csv(records: &[Record], rows: &[usize], columns: &[ColumnDef]) -> String {
    let mut csv = String::new();
    csv.push('\u{FEFF}');

    let header: Vec<String> = columns.iter().map(|c| escape_csv_cell(&c.label)).collect();
    csv.push_str(&header.join(SEPARATOR));
    csv.push('\n');

    for record in rows.iter().filter_map(|&idx| records.get(idx)) {
        let line: Vec<String> = columns
            .iter()
            .map(|c| escape_csv_cell(&cell_text(record, &c.key)))
            .collect();
        csv.push_str(&line.join(SEPARATOR));
        csv.push('\n');
    }

    csv
}

/// Quotes the cell when it holds a separator, quote or line break
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
