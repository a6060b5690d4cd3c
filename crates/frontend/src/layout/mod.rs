pub mod center;
pub mod global_context;
pub mod left;

use global_context::use_global_context;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Top bar with the sidebar toggle
#[component]
fn TopBar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="app-topbar">
            <button
                class="app-topbar__toggle"
                title=move || if ctx.left_open.get() { "Hide menu" } else { "Show menu" }
                on:click=move |_| ctx.toggle_left()
            >
                {move || icon(if ctx.left_open.get() { "chevron-left" } else { "chevron-right" })}
            </button>
        </div>
    }
}

/// Application shell.
///
/// ```text
/// +--------------------------------------+
/// |                TopBar                |
/// +-----------+--------------------------+
/// |  Sidebar  |         Content          |
/// |   (Left)  |         (Center)         |
/// +-----------+--------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopBar />
            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>
                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>
        </div>
    }
}
