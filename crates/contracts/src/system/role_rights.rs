use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One row of a role's rights matrix. `page` is a menu item label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagePermission {
    pub page: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub write: bool,
    #[serde(default)]
    pub delete: bool,
}

/// Role rights as returned by the role-rights endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRecord {
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<PagePermission>,
}

/// What the active role may do on one page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub can_read: bool,
    pub can_write: bool,
    pub can_delete: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities {
        can_read: false,
        can_write: false,
        can_delete: false,
    };

    pub const FULL: Capabilities = Capabilities {
        can_read: true,
        can_write: true,
        can_delete: true,
    };
}

impl From<&PagePermission> for Capabilities {
    fn from(p: &PagePermission) -> Self {
        Self {
            can_read: p.read,
            can_write: p.write,
            can_delete: p.delete,
        }
    }
}

/// First rights record configured for `role`
pub fn find_record<'a>(rights: &'a [PermissionRecord], role: &str) -> Option<&'a PermissionRecord> {
    rights.iter().find(|r| r.role == role)
}

/// Pages the role may read.
///
/// `None` means the role has no rights record at all and is not restricted.
pub fn allowed_pages(role: &str, rights: &[PermissionRecord]) -> Option<HashSet<String>> {
    find_record(rights, role).map(|record| {
        record
            .permissions
            .iter()
            .filter(|p| p.read)
            .map(|p| p.page.clone())
            .collect()
    })
}

/// Read/write/delete flags of `role` on `page`.
///
/// An unknown role, or a page missing from the role's matrix, gets no access.
/// Note this is the opposite default of [`allowed_pages`], which lets a role
/// without any record see every page.
pub fn capabilities_for(page: &str, role: &str, rights: &[PermissionRecord]) -> Capabilities {
    find_record(rights, role)
        .and_then(|record| record.permissions.iter().find(|p| p.page == page))
        .map(Capabilities::from)
        .unwrap_or(Capabilities::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(page: &str, read: bool, write: bool, delete: bool) -> PagePermission {
        PagePermission {
            page: page.to_string(),
            read,
            write,
            delete,
        }
    }

    fn rights() -> Vec<PermissionRecord> {
        vec![
            PermissionRecord {
                role: "editor".to_string(),
                permissions: vec![
                    perm("Dashboard", true, false, false),
                    perm("Members", true, true, false),
                    perm("Donations", false, false, false),
                ],
            },
            PermissionRecord {
                role: "admin".to_string(),
                permissions: vec![perm("Members", true, true, true)],
            },
        ]
    }

    #[test]
    fn test_allowed_pages() {
        let pages = allowed_pages("editor", &rights()).expect("editor has a record");
        let expected: HashSet<String> = ["Dashboard", "Members"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(pages, expected);
    }

    #[test]
    fn test_allowed_pages_without_record_is_unrestricted() {
        assert!(allowed_pages("guest", &rights()).is_none());
        assert!(allowed_pages("guest", &[]).is_none());
    }

    #[test]
    fn test_capabilities() {
        let rights = rights();
        assert_eq!(
            capabilities_for("Members", "editor", &rights),
            Capabilities {
                can_read: true,
                can_write: true,
                can_delete: false
            }
        );
        assert_eq!(capabilities_for("Members", "admin", &rights), Capabilities::FULL);
    }

    #[test]
    fn test_capabilities_fail_closed() {
        let rights = rights();
        // role without a record
        assert_eq!(capabilities_for("Members", "guest", &rights), Capabilities::NONE);
        // page missing from the role's matrix
        assert_eq!(capabilities_for("Events", "editor", &rights), Capabilities::NONE);
        assert_eq!(capabilities_for("Dashboard", "admin", &rights), Capabilities::NONE);
        assert_eq!(capabilities_for("Members", "admin", &[]), Capabilities::NONE);
    }

    #[test]
    fn test_first_record_wins() {
        let mut rights = rights();
        rights.push(PermissionRecord {
            role: "editor".to_string(),
            permissions: vec![perm("Events", true, true, true)],
        });
        assert_eq!(capabilities_for("Events", "editor", &rights), Capabilities::NONE);
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"[
            {"role":"viewer","permissions":[{"page":"Dashboard","read":true}]},
            {"role":"empty"}
        ]"#;
        let rights: Vec<PermissionRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(
            capabilities_for("Dashboard", "viewer", &rights),
            Capabilities {
                can_read: true,
                can_write: false,
                can_delete: false
            }
        );
        assert_eq!(allowed_pages("empty", &rights), Some(HashSet::new()));
    }
}
