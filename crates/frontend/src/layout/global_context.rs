use leptos::ev;
use leptos::prelude::*;
use web_sys::window;

fn current_path() -> Option<String> {
    window()?.location().pathname().ok()
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Path of the page shown in the center zone
    pub active_path: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let ctx = Self::at(current_path());

        // Back/forward buttons
        let active_path = ctx.active_path;
        let handle = window_event_listener(ev::popstate, move |_| {
            active_path.set(current_path());
        });
        on_cleanup(move || handle.remove());

        ctx
    }

    /// Context on `path` with the sidebar open, not tied to browser history
    fn at(path: Option<String>) -> Self {
        Self {
            active_path: RwSignal::new(path),
            left_open: RwSignal::new(true),
        }
    }

    /// Pushes `path` onto the browser history and makes it the active page
    pub fn navigate(&self, path: &str) {
        if self.active_path.with_untracked(|p| p.as_deref() == Some(path)) {
            return;
        }
        match window().map(|w| w.history()) {
            Some(Ok(history)) => {
                if let Err(e) =
                    history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
                {
                    log::warn!("history.pushState failed for {}: {:?}", path, e);
                }
            }
            _ => log::warn!("browser history unavailable"),
        }
        log::debug!("navigate to {}", path);
        self.active_path.set(Some(path.to_string()));
    }

    pub fn is_active(&self, path: &str) -> bool {
        self.active_path.with(|p| p.as_deref() == Some(path))
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_left() {
        let ctx = AppGlobalContext::at(Some("/members".to_string()));
        assert!(ctx.left_open.get_untracked());
        ctx.toggle_left();
        assert!(!ctx.left_open.get_untracked());
        ctx.toggle_left();
        assert!(ctx.left_open.get_untracked());
    }

    #[test]
    fn test_is_active() {
        let ctx = AppGlobalContext::at(Some("/members".to_string()));
        assert!(ctx.is_active("/members"));
        assert!(!ctx.is_active("/events"));
        assert!(!AppGlobalContext::at(None).is_active("/members"));
    }
}
