use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::pages::PageContent;
use crate::system::rights::RightsProvider;
use crate::system::session::{use_session, SessionProvider};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    view! {
        <SessionProvider>
            <RightsProvider>
                <SessionGate />
            </RightsProvider>
        </SessionProvider>
    }
}

/// Signing in happens elsewhere; without a stored session there is nothing to show.
#[component]
fn SessionGate() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.with(Option::is_some)
            fallback=|| {
                view! { <div class="app-signed-out">"Not signed in. Please log in first."</div> }
            }
        >
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! { <PageContent /> }.into_any()
            />
        </Show>
    }
}
