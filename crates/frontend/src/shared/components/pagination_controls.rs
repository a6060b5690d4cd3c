use crate::shared::icons::icon;
use contracts::shared::table_view::{PageToken, PAGE_SIZE_OPTIONS};
use leptos::prelude::*;

/// Prev/Next buttons, the compact page-number strip and the page-size select.
///
/// Pages are 1-based. Prev is disabled on page 1, Next on the last page
/// (and whenever there are no pages at all).
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    /// Rows left after filtering
    #[prop(into)]
    total_count: Signal<usize>,
    #[prop(into)] page_numbers: Signal<Vec<PageToken>>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let no_prev = move || current_page.get() <= 1;
    let no_next = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=no_prev
                title="Previous page"
            >
                {icon("chevron-left")}
                " Prev"
            </button>

            {move || {
                let current = current_page.get();
                page_numbers
                    .get()
                    .into_iter()
                    .map(|token| match token {
                        PageToken::Page(page) => view! {
                            <button
                                class="pagination-btn pagination-btn--page"
                                class:pagination-btn--current={page == current}
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                        .into_any(),
                        PageToken::Ellipsis => view! {
                            <span class="pagination-ellipsis">"…"</span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}

            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=no_next
                title="Next page"
            >
                "Next "
                {icon("chevron-right")}
            </button>

            <span class="pagination-info">
                {move || format!("{} records", total_count.get())}
            </span>

            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
