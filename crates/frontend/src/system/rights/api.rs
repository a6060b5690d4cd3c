use contracts::system::menu::MenuItem;
use contracts::system::role_rights::PermissionRecord;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{api_url, auth_header, MENU_CONFIG_PATH, ROLE_RIGHTS_PATH};

async fn get_json<T: DeserializeOwned>(path: &str, what: &str) -> Result<T, String> {
    let mut request = Request::get(&api_url(path));
    if let Some(auth) = auth_header() {
        request = request.header("Authorization", &auth);
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch {}: {}", what, response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse {}: {}", what, e))
}

/// Fetch the flat menu configuration
pub async fn fetch_menu_items() -> Result<Vec<MenuItem>, String> {
    get_json(MENU_CONFIG_PATH, "menu configuration").await
}

/// Fetch the rights matrices of all roles
pub async fn fetch_role_rights() -> Result<Vec<PermissionRecord>, String> {
    get_json(ROLE_RIGHTS_PATH, "role rights").await
}
