pub mod api;
pub mod context;
pub mod guard;

use contracts::system::role_rights::Capabilities;
use leptos::prelude::*;

pub use context::{use_rights, RightsContext, RightsProvider};
pub use guard::RequirePageAccess;

use crate::system::session::active_role;

/// Capabilities of the active role on `page`, for disabling or hiding
/// write and delete affordances
pub fn use_page_capabilities(page: impl Into<String>) -> Signal<Capabilities> {
    let page = page.into();
    let rights = use_rights();
    let role = active_role();
    Signal::derive(move || role.with(|r| rights.capabilities(&page, r)))
}
