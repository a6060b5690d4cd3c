pub mod role_rights;

use contracts::system::menu::MenuItem;
use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::system::rights::{use_rights, RequirePageAccess};

pub use role_rights::RoleRightsPage;

/// Center content for the active path.
///
/// Pages other than the rights matrix live in their own feature modules;
/// here they get the access guard and a heading named after their menu item.
#[component]
pub fn PageContent() -> impl IntoView {
    let ctx = use_global_context();
    let rights = use_rights();

    move || {
        let path = ctx.active_path.get().unwrap_or_default();
        let item: Option<MenuItem> = rights.state.with(|s| {
            s.menu_items
                .iter()
                .find(|i| i.path.as_deref() == Some(path.as_str()))
                .cloned()
        });

        match item {
            Some(item) if item.label == role_rights::PAGE_LABEL => {
                view! { <RoleRightsPage /> }.into_any()
            }
            Some(item) => {
                let label = item.label.clone();
                view! {
                    <RequirePageAccess page=item.label>
                        <div class="page">
                            <h2>{label.clone()}</h2>
                        </div>
                    </RequirePageAccess>
                }
                .into_any()
            }
            None => view! {
                <div class="page page--empty">"Select a page from the menu."</div>
            }
            .into_any(),
        }
    }
}
