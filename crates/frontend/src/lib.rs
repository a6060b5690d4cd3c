//! Admin console client: data tables, role-filtered sidebar and page guards.

pub mod app;
pub mod layout;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

fn init_logging() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        // a logger is already installed, keep it
        return;
    }
    log::info!("admin console client starting");
}

#[wasm_bindgen(start)]
pub fn start() {
    init_logging();
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
