//! "Select all" checkbox for the visible page of a table
//!
//! ```ignore
//! <TableHeaderCheckbox
//!     rows=Signal::derive(move || view.get().rows)
//!     selected=selected
//!     on_change=Callback::new(move |check_all: bool| { ... })
//! />
//! ```

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Header checkbox with three states derived from which visible rows are
/// selected. Clicking selects or clears the visible rows.
#[component]
pub fn TableHeaderCheckbox(
    /// Record indices shown on the current page
    #[prop(into)]
    rows: Signal<Vec<usize>>,
    #[prop(into)] selected: Signal<HashSet<usize>>,
    /// true = select all visible, false = clear visible
    on_change: Callback<bool>,
) -> impl IntoView {
    let state = Signal::derive(move || {
        let rows = rows.get();
        if rows.is_empty() {
            return CheckboxState::Unchecked;
        }
        let picked = selected.with(|sel| rows.iter().filter(|idx| sel.contains(*idx)).count());
        if picked == 0 {
            CheckboxState::Unchecked
        } else if picked == rows.len() {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate is a DOM property only
    Effect::new(move |_| {
        let indeterminate = state.get() == CheckboxState::Indeterminate;
        if let Some(input) = checkbox_ref.get() {
            if let Some(el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                el.set_indeterminate(indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == CheckboxState::Checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
