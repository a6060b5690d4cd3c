use contracts::system::menu::MenuItem;
use contracts::system::role_rights::{capabilities_for, Capabilities, PermissionRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

/// Menu configuration and role rights as last fetched from the backend
#[derive(Clone, Debug, Default)]
pub struct RightsState {
    pub menu_items: Vec<MenuItem>,
    pub rights: Vec<PermissionRecord>,
    pub is_loaded: bool,
    pub error: Option<String>,
}

#[derive(Clone, Copy)]
pub struct RightsContext {
    pub state: RwSignal<RightsState>,
    loading: RwSignal<bool>,
}

impl RightsContext {
    fn new() -> Self {
        Self {
            state: RwSignal::new(RightsState::default()),
            loading: RwSignal::new(false),
        }
    }

    /// Refetches both lists; a reload already in flight is not duplicated
    pub fn reload(&self) {
        if self.loading.get_untracked() {
            return;
        }
        self.loading.set(true);

        let state = self.state;
        let loading = self.loading;
        spawn_local(async move {
            let (menu, rights) = (api::fetch_menu_items().await, api::fetch_role_rights().await);

            let mut errors = Vec::new();
            state.update(|s| {
                match menu {
                    Ok(items) => {
                        log::debug!("menu configuration loaded: {} items", items.len());
                        s.menu_items = items;
                    }
                    Err(e) => errors.push(e),
                }
                match rights {
                    Ok(rights) => {
                        log::debug!("role rights loaded: {} roles", rights.len());
                        s.rights = rights;
                    }
                    Err(e) => errors.push(e),
                }
                for e in &errors {
                    log::error!("{}", e);
                }
                s.error = (!errors.is_empty()).then(|| errors.join("; "));
                s.is_loaded = true;
            });
            loading.set(false);
        });
    }

    pub fn is_loaded(&self) -> bool {
        self.state.with(|s| s.is_loaded)
    }

    pub fn capabilities(&self, page: &str, role: &str) -> Capabilities {
        self.state.with(|s| capabilities_for(page, role, &s.rights))
    }
}

/// Shares menu configuration and role rights with the whole app.
/// Data is fetched by [`RightsContext::reload`], which the sidebar calls on mount.
#[component]
pub fn RightsProvider(children: Children) -> impl IntoView {
    provide_context(RightsContext::new());
    children()
}

pub fn use_rights() -> RightsContext {
    use_context::<RightsContext>().expect("RightsProvider not found in component tree")
}
