use contracts::system::session::Session;
use web_sys::window;

/// Key under which the login screen persists the signed-in user record
const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Reads the persisted user record once and turns it into a session.
///
/// A missing record means nobody is signed in; a malformed one is logged
/// and treated the same way.
pub fn load_session() -> Option<Session> {
    let raw = get_local_storage()?.get_item(USER_KEY).ok()??;
    match Session::from_user_json(&raw) {
        Ok(session) => {
            log::debug!("session restored for user '{}' as '{}'", session.user_id, session.role);
            Some(session)
        }
        Err(e) => {
            log::warn!("ignoring stored user record: {:#}", e);
            None
        }
    }
}
