//! Tabular view engine: client-side filter, sort and pagination over an
//! in-memory list of records.
//!
//! Every list page hands the engine its fetched records plus the column list
//! and gets back the visible slice. The pipeline is always
//! filter → sort → paginate and is recomputed in full on each state change.
//!
//! Rows are addressed by their index in the caller's slice, so the caller can
//! render or select the original data without cloning it.

pub mod export;
pub mod filter;
pub mod pager;
pub mod sort;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use filter::{filter_indices, matches_columns, matches_global};
pub use pager::{page_numbers, page_slice, total_pages, PageToken};
pub use sort::{sort_indices, Collator, PlainCollator};

/// One row of domain data of arbitrary shape
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Page sizes offered by the items-per-page selector
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Data half of a column descriptor: which field to read and how to label it.
///
/// `key` must be unique within one column list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub key: String,
    pub label: String,
}

impl ColumnDef {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

/// Sort specification; `key == None` keeps the filtered order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    /// Active sort key, treating an empty key as unset
    pub fn active_key(&self) -> Option<&str> {
        self.key.as_deref().filter(|k| !k.is_empty())
    }
}

/// The part of the view state that decides which rows survive and in what
/// order. Paging never changes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewQuery {
    pub global_search: String,
    /// column key -> substring filter; empty strings are never stored
    pub column_search: HashMap<String, String>,
    pub sort: SortSpec,
}

/// Ephemeral per-table UI state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub query: ViewQuery,
    pub items_per_page: usize,
    /// 1-based
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: ViewQuery::default(),
            items_per_page: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }
}

impl ViewState {
    pub fn set_global_search(&mut self, value: impl Into<String>) {
        self.query.global_search = value.into();
        self.current_page = 1;
    }

    /// Empty value removes the filter for that column
    pub fn set_column_search(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.query.column_search.remove(key);
        } else {
            self.query.column_search.insert(key.to_string(), value);
        }
        self.current_page = 1;
    }

    pub fn column_search(&self, key: &str) -> &str {
        self.query
            .column_search
            .get(key)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Same key flips the direction, a new key starts ascending.
    /// The current page is kept.
    pub fn toggle_sort(&mut self, key: &str) {
        let sort = &mut self.query.sort;
        if sort.active_key() == Some(key) {
            sort.direction = sort.direction.toggled();
        } else {
            sort.key = Some(key.to_string());
            sort.direction = SortDirection::Ascending;
        }
    }

    /// Accepts only values from [`PAGE_SIZE_OPTIONS`]
    pub fn set_items_per_page(&mut self, size: usize) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return false;
        }
        self.items_per_page = size;
        self.current_page = 1;
        true
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.current_page < total_pages {
            self.current_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }
}

/// Derived view for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Indices of the visible records, in display order
    pub rows: Vec<usize>,
    /// Records left after filtering
    pub total_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_numbers: Vec<PageToken>,
    pub has_prev: bool,
    pub has_next: bool,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

/// Text of `record[key]` used for matching, sorting and export.
///
/// Missing keys and nulls are empty; nested values become compact JSON.
/// Fractional numbers print the way a browser prints them (`1e-7`, not
/// `0.0000001`), so a search typed against the rendered value still matches.
pub fn cell_text(record: &Record, key: &str) -> String {
    use serde_json::Value;

    match record.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(js_number_text).unwrap_or_default()
            }
        }
        Some(other) => other.to_string(),
    }
}

/// ECMAScript `Number::toString` for finite values: plain notation for
/// decimal exponents in `-7..21`, exponent form otherwise.
fn js_number_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` gives the shortest round-trip digits, e.g. "1.2345e3"
    let sci = format!("{:e}", value.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exp: i32 = exp.parse().unwrap_or(0);

    // value = 0.digits * 10^point
    let k = digits.len() as i32;
    let point = exp + 1;

    let body = if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
    } else {
        let (first, rest) = digits.split_at(1);
        let sign = if exp >= 0 { '+' } else { '-' };
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, exp.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, exp.abs())
        }
    };

    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Filter then sort; the result is every surviving record index in display
/// order. Independent of paging, so callers can cache it per query.
pub fn filter_and_sort<C: Collator + ?Sized>(
    records: &[Record],
    columns: &[ColumnDef],
    query: &ViewQuery,
    collator: &C,
) -> Vec<usize> {
    let mut indices = filter_indices(records, columns, query);
    sort_indices(records, &mut indices, &query.sort, collator);
    indices
}

/// Cut one page out of an already filtered and sorted index list.
///
/// An out-of-range page yields no rows; the page number is reported as-is.
pub fn paginate(sorted: &[usize], items_per_page: usize, current_page: usize) -> TableView {
    let total_count = sorted.len();
    let total_pages = total_pages(total_count, items_per_page);

    TableView {
        rows: page_slice(sorted, current_page, items_per_page).to_vec(),
        total_count,
        total_pages,
        current_page,
        page_numbers: page_numbers(current_page, total_pages),
        has_prev: current_page > 1,
        has_next: current_page < total_pages,
    }
}

/// Full pipeline: filter → sort → paginate
pub fn compute_view<C: Collator + ?Sized>(
    records: &[Record],
    columns: &[ColumnDef],
    state: &ViewState,
    collator: &C,
) -> TableView {
    let sorted = filter_and_sort(records, columns, &state.query, collator);
    paginate(&sorted, state.items_per_page, state.current_page)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::{ColumnDef, Record};
    use serde_json::json;

    pub fn record(value: serde_json::Value) -> Record {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    pub fn people() -> Vec<Record> {
        vec![
            record(json!({"name": "Amit", "city": "Delhi", "age": 34})),
            record(json!({"name": "Ravi", "city": "Mumbai", "age": 28})),
            record(json!({"name": "Sunita", "city": "Pune", "age": 41})),
            record(json!({"name": "Meera", "city": "Mumbai", "age": 52})),
            record(json!({"name": "Kiran", "city": "Chennai"})),
        ]
    }

    pub fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("name", "Name"),
            ColumnDef::new("city", "City"),
            ColumnDef::new("age", "Age"),
        ]
    }
}
