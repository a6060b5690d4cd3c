use contracts::system::session::Session;
use leptos::prelude::*;

use super::storage;

/// Provides the current [`Session`] to the component tree.
///
/// The session is read from storage here, once; everything below receives
/// it through context instead of touching storage itself.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(storage::load_session());
    provide_context(session);

    children()
}

pub fn use_session() -> RwSignal<Option<Session>> {
    use_context::<RwSignal<Option<Session>>>().expect("SessionProvider not found in component tree")
}

/// Role of the signed-in user, empty when there is no session
pub fn active_role() -> Signal<String> {
    let session = use_session();
    Signal::derive(move || session.with(|s| s.as_ref().map(|s| s.role.clone()).unwrap_or_default()))
}
