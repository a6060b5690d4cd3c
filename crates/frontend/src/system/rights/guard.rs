use leptos::prelude::*;

use super::context::use_rights;
use super::use_page_capabilities;
use crate::shared::icons::icon;

/// Renders its children only when the active role may read `page`.
///
/// `page` is the menu label the role rights refer to.
#[component]
pub fn RequirePageAccess(#[prop(into)] page: String, children: ChildrenFn) -> impl IntoView {
    let rights = use_rights();
    let caps = use_page_capabilities(page.clone());
    let page = StoredValue::new(page);
    let children = StoredValue::new(children);

    view! {
        <Show
            when=move || rights.is_loaded()
            fallback=|| view! { <div class="page__loading">"Loading..."</div> }
        >
            <Show
                when=move || caps.get().can_read
                fallback=move || view! {
                    <div class="alert alert--error">
                        {icon("lock")}
                        {page.with_value(|p| {
                            format!(" Access denied: your role cannot open \"{}\".", p)
                        })}
                    </div>
                }
            >
                {children.with_value(|c| c())}
            </Show>
        </Show>
    }
}
