use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Row selection checkbox; the click does not reach the row
#[component]
pub fn TableCellCheckbox(
    /// Record index of the row
    row: usize,
    #[prop(into)] selected: Signal<HashSet<usize>>,
    /// (row, checked)
    on_change: Callback<(usize, bool)>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.with(|sel| sel.contains(&row))
                on:change=move |ev| on_change.run((row, event_target_checked(&ev)))
            />
        </TableCell>
    }
}
