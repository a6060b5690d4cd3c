//! API utilities for frontend-backend communication
//!
//! The backend listens on port 3000 of the host that served the client.

use web_sys::window;

/// Menu configuration records (flat list of menu items)
pub const MENU_CONFIG_PATH: &str = "/api/menu-config";

/// Role rights records (one permission matrix per role)
pub const ROLE_RIGHTS_PATH: &str = "/api/role-rights";

const ACCESS_TOKEN_KEY: &str = "auth_access_token";

/// Base URL like "http://localhost:3000"; empty outside a browser
pub fn api_base() -> String {
    let Some(window) = window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Full API URL for a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// "Bearer <token>" when the login screen left a token behind
pub fn auth_header() -> Option<String> {
    window()?
        .local_storage()
        .ok()??
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .map(|token| format!("Bearer {}", token))
}
