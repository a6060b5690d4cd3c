use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Current user and role, passed explicitly to everything that needs them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub role: String,
}

/// Shape of the user record the login screen persists; extra fields ignored.
///
/// The id may come under any of three names, and records often carry more
/// than one of them, so each is read separately.
#[derive(Debug, Deserialize)]
struct StoredUser {
    #[serde(rename = "_id", default)]
    object_id: Option<serde_json::Value>,
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    user_id: Option<serde_json::Value>,
    role: Option<String>,
}

impl StoredUser {
    /// First non-null of `_id`, `id`, `user_id`
    fn any_id(self) -> Option<serde_json::Value> {
        [self.object_id, self.id, self.user_id]
            .into_iter()
            .flatten()
            .find(|v| !v.is_null())
    }
}

impl Session {
    pub fn new(user_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: role.into(),
        }
    }

    /// Parses the persisted user record into a session
    pub fn from_user_json(json: &str) -> Result<Self> {
        let user: StoredUser =
            serde_json::from_str(json).context("Stored user record is not valid JSON")?;

        let role = user
            .role
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .context("Stored user record has no role")?;

        let user_id = match user.any_id() {
            None => String::new(),
            Some(serde_json::Value::String(id)) => id,
            Some(other) => other.to_string(),
        };

        Ok(Self { user_id, role })
    }
}
