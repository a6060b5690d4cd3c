//! Generic list table: global search, per-column search, sortable headers,
//! pagination, print and CSV export over an in-memory record list.
//!
//! ```ignore
//! let columns = vec![
//!     TableColumn::new("name", "Name"),
//!     TableColumn::new("city", "City"),
//!     TableColumn::new("amount", "Amount")
//!         .render(|r| view! { <b>{format_money_cell(r)}</b> }.into_any()),
//! ];
//!
//! <DataTable table_id="donations" records=records columns=columns show_checkbox=true />
//! ```
//!
//! All view state is local to one table instance and dropped on unmount.

mod column;

pub use column::{CellRenderer, TableColumn};

use contracts::shared::table_view::{
    export::to_csv, filter_and_sort, paginate, ColumnDef, Record, ViewState,
};
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

use crate::shared::collator::BrowserCollator;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::export::{download_csv, print_page};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;

#[component]
pub fn DataTable(
    /// Records as fetched by the page
    #[prop(into)]
    records: Signal<Vec<Record>>,
    columns: Vec<TableColumn>,
    /// Adds a selection checkbox column
    #[prop(optional)]
    show_checkbox: bool,
    /// DOM id of the table; also the export file name prefix
    #[prop(optional, into)]
    table_id: Option<String>,
    /// Called with the selected record indices, in ascending order, whenever
    /// the selection changes
    #[prop(optional)]
    on_selection_change: Option<Callback<Vec<usize>>>,
) -> impl IntoView {
    let table_id = table_id.unwrap_or_else(|| "data-table".to_string());
    let span = columns.len() + usize::from(show_checkbox);
    let defs: Vec<ColumnDef> = columns.iter().map(TableColumn::def).collect();
    let columns = StoredValue::new(columns);
    let defs = StoredValue::new(defs);

    let state = RwSignal::new(ViewState::default());
    let selected: RwSignal<HashSet<usize>> = RwSignal::new(HashSet::new());
    let (error, set_error) = signal::<Option<String>>(None);

    // Filtering and sorting only rerun when the records or the query change,
    // paging works off the cached order.
    let query = Memo::new(move |_| state.with(|s| s.query.clone()));
    let sorted = Memo::new(move |_| {
        let query = query.get();
        records.with(|rs| defs.with_value(|d| filter_and_sort(rs, d, &query, &BrowserCollator)))
    });
    let view_data = Memo::new(move |_| {
        let (per_page, page) = state.with(|s| (s.items_per_page, s.current_page));
        sorted.with(|rows| paginate(rows, per_page, page))
    });

    // A new record list invalidates row indices
    Effect::new(move |_| {
        records.track();
        selected.set(HashSet::new());
    });

    Effect::new(move |_| {
        let mut rows: Vec<usize> = selected.get().into_iter().collect();
        rows.sort_unstable();
        if let Some(callback) = on_selection_change {
            callback.run(rows);
        }
    });

    let toggle_sort = Callback::new(move |key: String| state.update(|s| s.toggle_sort(&key)));
    let go_to_page = Callback::new(move |page: usize| state.update(|s| s.go_to_page(page)));
    let change_page_size = Callback::new(move |size: usize| {
        state.update(|s| {
            if !s.set_items_per_page(size) {
                log::warn!("ignored unsupported page size {}", size);
            }
        })
    });
    let set_global =
        Callback::new(move |value: String| state.update(|s| s.set_global_search(value)));

    let toggle_row = Callback::new(move |(row, checked): (usize, bool)| {
        selected.update(|sel| {
            if checked {
                sel.insert(row);
            } else {
                sel.remove(&row);
            }
        });
    });
    let toggle_visible = Callback::new(move |check_all: bool| {
        let rows = view_data.with_untracked(|v| v.rows.clone());
        selected.update(|sel| {
            for row in rows {
                if check_all {
                    sel.insert(row);
                } else {
                    sel.remove(&row);
                }
            }
        });
    });

    let export_id = table_id.clone();
    let export_csv = move |_| {
        set_error.set(None);
        if sorted.with_untracked(Vec::is_empty) {
            set_error.set(Some("No data to export".to_string()));
            return;
        }
        let csv = records.with_untracked(|rs| {
            sorted.with_untracked(|rows| defs.with_value(|d| to_csv(rs, rows, d)))
        });
        let filename = format!("{}_{}.csv", export_id, chrono::Local::now().format("%Y%m%d_%H%M"));
        if let Err(e) = download_csv(&csv, &filename) {
            log::error!("export of {} failed: {}", filename, e);
            set_error.set(Some(e));
        }
    };

    let print = move |_| {
        if let Err(e) = print_page() {
            log::error!("{}", e);
            set_error.set(Some(e));
        }
    };

    let sort_signal = Signal::derive(move || state.with(|s| s.query.sort.clone()));
    let rows_signal = Signal::derive(move || view_data.with(|v| v.rows.clone()));
    let selected_signal = Signal::derive(move || selected.get());

    let body = move || {
        let view = view_data.get();
        if view.rows.is_empty() {
            return view! {
                <TableRow>
                    <TableCell attr:colspan={span.to_string()} class="table__empty">
                        "No data found"
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }

        records.with(|rs| {
            view.rows
                .iter()
                .filter_map(|&idx| rs.get(idx).map(|record| (idx, record)))
                .map(|(idx, record)| {
                    let cells = columns.with_value(|cols| {
                        cols.iter()
                            .map(|col| {
                                let cell = col.cell(record);
                                view! {
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {cell}
                                        </TableCellLayout>
                                    </TableCell>
                                }
                            })
                            .collect_view()
                    });
                    view! {
                        <TableRow>
                            {show_checkbox.then(|| view! {
                                <TableCellCheckbox
                                    row=idx
                                    selected=selected_signal
                                    on_change=toggle_row
                                />
                            })}
                            {cells}
                        </TableRow>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    let column_search_row = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let key = StoredValue::new(col.key.clone());
                let label = col.label.clone();
                view! {
                    <TableCell>
                        <SearchInput
                            class="search-input--column"
                            placeholder={format!("Search {}", label)}
                            value=Signal::derive(move || {
                                state.with(|s| key.with_value(|k| s.column_search(k).to_string()))
                            })
                            on_change=Callback::new(move |value: String| {
                                state.update(|s| key.with_value(|k| s.set_column_search(k, value)))
                            })
                        />
                    </TableCell>
                }
            })
            .collect_view()
    });

    let headers = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                view! {
                    <SortableHeaderCell
                        label=col.label.clone()
                        sort_key=col.key.clone()
                        sort=sort_signal
                        on_sort=toggle_sort
                    />
                }
            })
            .collect_view()
    });

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <div class="data-table__toolbar-left">
                    {icon("search")}
                    <SearchInput
                        placeholder="Search all columns..."
                        value=Signal::derive(move || state.with(|s| s.query.global_search.clone()))
                        on_change=set_global
                    />
                </div>
                <div class="data-table__toolbar-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=print>
                        {icon("printer")}
                        " Print"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=export_csv>
                        {icon("download")}
                        " Excel"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="table-wrapper">
                <Table attr:id=table_id attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {show_checkbox.then(|| view! {
                                <TableHeaderCheckbox
                                    rows=rows_signal
                                    selected=selected_signal
                                    on_change=toggle_visible
                                />
                            })}
                            {headers}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {body}
                        <TableRow class="data-table__column-search">
                            {show_checkbox.then(|| view! { <TableCell>""</TableCell> })}
                            {column_search_row}
                        </TableRow>
                    </TableBody>
                </Table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || view_data.with(|v| v.current_page))
                total_pages=Signal::derive(move || view_data.with(|v| v.total_pages))
                total_count=Signal::derive(move || view_data.with(|v| v.total_count))
                page_numbers=Signal::derive(move || view_data.with(|v| v.page_numbers.clone()))
                page_size=Signal::derive(move || state.with(|s| s.items_per_page))
                on_page_change=go_to_page
                on_page_size_change=change_page_size
            />
        </div>
    }
}
