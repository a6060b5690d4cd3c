//! Sortable column header
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="City"
//!     sort_key="city"
//!     sort=Signal::derive(move || state.with(|s| s.query.sort.clone()))
//!     on_sort=Callback::new(move |key: String| state.update(|s| s.toggle_sort(&key)))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::table_view::SortSpec;
use leptos::prelude::*;
use thaw::*;

/// Header cell that shows the sort indicator and reports clicks with its key
#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    #[prop(into)] sort_key: String,
    #[prop(into)] sort: Signal<SortSpec>,
    on_sort: Callback<String>,
    #[prop(optional, default = 100.0)] min_width: f64,
) -> impl IntoView {
    let key = StoredValue::new(sort_key);

    view! {
        <TableHeaderCell resizable=false min_width=min_width class="resizable">
            <div
                class="table__sortable-header"
                style="cursor: pointer; padding-right: 12px;"
                on:click=move |_| on_sort.run(key.get_value())
            >
                {label}
                <span class=move || key.with_value(|k| get_sort_class(&sort.get(), k))>
                    {move || key.with_value(|k| get_sort_indicator(&sort.get(), k))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
