//! Row filtering: one global search box plus per-column searches.
//!
//! Matching is always done against the raw field text (see [`cell_text`]),
//! never against what a column renders.

use super::{cell_text, ColumnDef, Record, ViewQuery};
use std::collections::HashMap;

/// True when any column's text contains `needle`, case-insensitively.
/// An empty needle matches every record.
pub fn matches_global(record: &Record, columns: &[ColumnDef], needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    contains_in_any(record, columns, &needle.to_lowercase())
}

/// True when every column with a non-empty search contains its substring.
/// Searches for keys outside `columns` are ignored.
pub fn matches_columns(
    record: &Record,
    columns: &[ColumnDef],
    column_search: &HashMap<String, String>,
) -> bool {
    columns.iter().all(|column| match column_search.get(&column.key) {
        Some(needle) if !needle.is_empty() => cell_text(record, &column.key)
            .to_lowercase()
            .contains(&needle.to_lowercase()),
        _ => true,
    })
}

/// Indices of the records passing both the global and the column clauses,
/// in input order.
pub fn filter_indices(records: &[Record], columns: &[ColumnDef], query: &ViewQuery) -> Vec<usize> {
    let global = query.global_search.to_lowercase();
    let active: Vec<(&str, String)> = columns
        .iter()
        .filter_map(|column| {
            query
                .column_search
                .get(&column.key)
                .filter(|needle| !needle.is_empty())
                .map(|needle| (column.key.as_str(), needle.to_lowercase()))
        })
        .collect();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| global.is_empty() || contains_in_any(record, columns, &global))
        .filter(|(_, record)| {
            active
                .iter()
                .all(|(key, needle)| cell_text(record, key).to_lowercase().contains(needle))
        })
        .map(|(idx, _)| idx)
        .collect()
}

fn contains_in_any(record: &Record, columns: &[ColumnDef], needle_lower: &str) -> bool {
    columns
        .iter()
        .any(|column| cell_text(record, &column.key).to_lowercase().contains(needle_lower))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{columns, people, record};
    use super::*;
    use serde_json::json;

    fn query(global: &str, column: &[(&str, &str)]) -> ViewQuery {
        ViewQuery {
            global_search: global.to_string(),
            column_search: column
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..ViewQuery::default()
        }
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let records = people();
        let idx = filter_indices(&records, &columns(), &ViewQuery::default());
        assert_eq!(idx, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_global_is_case_insensitive() {
        let records = people();
        assert_eq!(filter_indices(&records, &columns(), &query("MUM", &[])), vec![1, 3]);
        assert_eq!(filter_indices(&records, &columns(), &query("amit", &[])), vec![0]);
    }

    #[test]
    fn test_global_matches_numbers() {
        let records = people();
        assert_eq!(filter_indices(&records, &columns(), &query("52", &[])), vec![3]);
    }

    #[test]
    fn test_global_only_looks_at_listed_columns() {
        let records = vec![record(json!({"name": "Amit", "secret": "needle"}))];
        let cols = vec![ColumnDef::new("name", "Name")];
        assert!(filter_indices(&records, &cols, &query("needle", &[])).is_empty());
        assert!(!matches_global(&records[0], &cols, "needle"));
        assert!(matches_global(&records[0], &cols, ""));
    }

    #[test]
    fn test_column_filters_are_conjunctive() {
        let records = people();
        let cols = columns();

        let one = filter_indices(&records, &cols, &query("", &[("city", "mumbai")]));
        assert_eq!(one, vec![1, 3]);

        let two = filter_indices(
            &records,
            &cols,
            &query("", &[("city", "mumbai"), ("name", "ra")]),
        );
        assert_eq!(two, vec![1]);
        assert!(two.len() <= one.len());

        assert!(matches_columns(
            &records[1],
            &cols,
            &query("", &[("city", "mumbai"), ("name", "ra")]).column_search
        ));
        assert!(!matches_columns(
            &records[3],
            &cols,
            &query("", &[("city", "mumbai"), ("name", "ra")]).column_search
        ));
    }

    #[test]
    fn test_global_and_column_combined() {
        let records = people();
        let idx = filter_indices(&records, &columns(), &query("e", &[("city", "mumbai")]));
        // Meera matches both; Ravi has no "e" anywhere
        assert_eq!(idx, vec![3]);
    }

    #[test]
    fn test_missing_field_is_empty_text() {
        let records = people();
        // Kiran has no age
        let idx = filter_indices(&records, &columns(), &query("", &[("age", "4")]));
        assert_eq!(idx, vec![0, 2]);
    }

    #[test]
    fn test_unknown_column_search_is_ignored() {
        let records = people();
        let idx = filter_indices(&records, &columns(), &query("", &[("nope", "xyz")]));
        assert_eq!(idx.len(), records.len());
    }

    #[test]
    fn test_whitespace_search_is_not_trimmed() {
        let records = vec![
            record(json!({"name": "Amit Shah"})),
            record(json!({"name": "Ravi"})),
        ];
        let cols = vec![ColumnDef::new("name", "Name")];
        assert_eq!(filter_indices(&records, &cols, &query(" ", &[])), vec![0]);
    }
}
