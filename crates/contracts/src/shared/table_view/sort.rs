//! Row ordering by a single column.

use super::{cell_text, Record, SortDirection, SortSpec};
use std::cmp::Ordering;

/// String comparison used for sorting.
///
/// Both arguments are already lower-cased. The browser client plugs in
/// `localeCompare`; native code and tests use [`PlainCollator`].
pub trait Collator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Code-point order
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCollator;

impl Collator for PlainCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

impl<F> Collator for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// Stable sort of `indices` by the lower-cased text of `records[i][key]`.
///
/// No key leaves the order untouched. Descending reverses the comparison,
/// so equal keys keep their relative order in both directions.
pub fn sort_indices<C: Collator + ?Sized>(
    records: &[Record],
    indices: &mut Vec<usize>,
    sort: &SortSpec,
    collator: &C,
) {
    let Some(key) = sort.active_key() else {
        return;
    };

    let mut keyed: Vec<(usize, String)> = indices
        .iter()
        .map(|&idx| {
            let text = records
                .get(idx)
                .map(|r| cell_text(r, key).to_lowercase())
                .unwrap_or_default();
            (idx, text)
        })
        .collect();

    keyed.sort_by(|(_, a), (_, b)| {
        let cmp = collator.compare(a, b);
        match sort.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });

    *indices = keyed.into_iter().map(|(idx, _)| idx).collect();
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{people, record};
    use super::*;
    use serde_json::json;

    fn sorted(records: &[Record], key: &str, direction: SortDirection) -> Vec<usize> {
        let mut idx: Vec<usize> = (0..records.len()).collect();
        sort_indices(records, &mut idx, &SortSpec::by(key, direction), &PlainCollator);
        idx
    }

    #[test]
    fn test_no_key_keeps_order() {
        let records = people();
        let mut idx = vec![3, 0, 4];
        sort_indices(&records, &mut idx, &SortSpec::default(), &PlainCollator);
        assert_eq!(idx, vec![3, 0, 4]);

        let empty_key = SortSpec::by("", SortDirection::Descending);
        sort_indices(&records, &mut idx, &empty_key, &PlainCollator);
        assert_eq!(idx, vec![3, 0, 4]);
    }

    #[test]
    fn test_ascending_by_name() {
        let records = people();
        // Amit, Kiran, Meera, Ravi, Sunita
        assert_eq!(sorted(&records, "name", SortDirection::Ascending), vec![0, 4, 3, 1, 2]);
    }

    #[test]
    fn test_descending_is_reverse_without_ties() {
        let records = people();
        let mut asc = sorted(&records, "name", SortDirection::Ascending);
        let desc = sorted(&records, "name", SortDirection::Descending);
        asc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_ties_keep_filtered_order() {
        let records = people();
        // Ravi (1) and Meera (3) share Mumbai
        let asc = sorted(&records, "city", SortDirection::Ascending);
        assert_eq!(asc, vec![4, 0, 1, 3, 2]);
        let desc = sorted(&records, "city", SortDirection::Descending);
        assert_eq!(desc, vec![2, 1, 3, 0, 4]);
    }

    #[test]
    fn test_case_insensitive() {
        let records = vec![
            record(json!({"name": "bravo"})),
            record(json!({"name": "Alpha"})),
            record(json!({"name": "charlie"})),
        ];
        assert_eq!(sorted(&records, "name", SortDirection::Ascending), vec![1, 0, 2]);
    }

    #[test]
    fn test_numbers_compare_as_text() {
        let records = vec![
            record(json!({"n": 9})),
            record(json!({"n": 10})),
            record(json!({"n": 100})),
        ];
        assert_eq!(sorted(&records, "n", SortDirection::Ascending), vec![1, 2, 0]);
    }

    #[test]
    fn test_missing_values_sort_first() {
        let records = people();
        // Kiran has no age -> ""
        assert_eq!(sorted(&records, "age", SortDirection::Ascending), vec![4, 1, 0, 2, 3]);
    }

    #[test]
    fn test_custom_collator() {
        let records = people();
        let mut idx: Vec<usize> = (0..records.len()).collect();
        let by_len = |a: &str, b: &str| a.len().cmp(&b.len());
        sort_indices(
            &records,
            &mut idx,
            &SortSpec::by("name", SortDirection::Ascending),
            &by_len,
        );
        // 4-letter names first in original order, then 5, then 6
        assert_eq!(idx, vec![0, 1, 3, 4, 2]);
    }
}
