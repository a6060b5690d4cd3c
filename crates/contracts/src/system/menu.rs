//! Sidebar menu configuration and the role-filtered menu tree.
//!
//! Menu items arrive as a flat list from the menu-configuration endpoint.
//! Parent/child links are by label: a child names its parent's label in
//! `parent_menu`, compared after trimming. Only one level of nesting is
//! rendered.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::role_rights::{allowed_pages, PermissionRecord};

/// Fixed section order of the sidebar. Sections not listed here follow,
/// in the order they were first seen.
pub const SECTION_PRIORITY: [&str; 5] = [
    "MAIN",
    "PARTNER SECTION",
    "EVENT SECTION",
    "ADMIN MANAGEMENT",
    "CONTENT",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuStatus {
    Active,
    /// Also covers any status string the backend sends that we do not know
    #[default]
    #[serde(other)]
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display name; also the identity other items refer to
    pub label: String,
    /// Route; absent for group items
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub parent_menu: Option<String>,
    #[serde(default)]
    pub status: MenuStatus,
    #[serde(default)]
    pub order_by: i64,
}

impl MenuItem {
    /// Trimmed parent label, `None` for root items
    pub fn parent_label(&self) -> Option<&str> {
        self.parent_menu
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    pub fn is_root(&self) -> bool {
        self.parent_label().is_none()
    }

    pub fn is_active(&self) -> bool {
        self.status == MenuStatus::Active
    }
}

/// Root menu item with its visible children.
///
/// `children` is `None` for a leaf so the sidebar can tell links from
/// expandable groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    #[serde(flatten)]
    pub item: MenuItem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuItem>>,
}

impl MenuNode {
    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    pub section: String,
    pub items: Vec<MenuNode>,
}

/// Builds the sectioned sidebar tree visible to `active_role`.
///
/// A role without a rights record sees every active item. Otherwise only
/// items whose label the role may read survive; children do not inherit
/// their parent's visibility. A child whose parent was dropped is not shown.
pub fn build_menu(
    items: &[MenuItem],
    active_role: &str,
    rights: &[PermissionRecord],
) -> Vec<MenuSection> {
    let allowed = allowed_pages(active_role, rights);

    let mut sorted: Vec<&MenuItem> = items.iter().collect();
    sorted.sort_by_key(|item| item.order_by);

    let visible = sorted.into_iter().filter(|item| {
        item.is_active()
            && allowed
                .as_ref()
                .map_or(true, |pages| pages.contains(&item.label))
    });

    let mut roots: Vec<&MenuItem> = Vec::new();
    let mut children: HashMap<&str, Vec<MenuItem>> = HashMap::new();
    for item in visible {
        match item.parent_label() {
            None => roots.push(item),
            Some(parent) => children.entry(parent).or_default().push(item.clone()),
        }
    }

    let mut sections: Vec<MenuSection> = Vec::new();
    for root in roots {
        let node = MenuNode {
            item: root.clone(),
            children: children
                .get(root.label.trim())
                .filter(|c| !c.is_empty())
                .cloned(),
        };
        match sections.iter_mut().find(|s| s.section == root.section) {
            Some(section) => section.items.push(node),
            None => sections.push(MenuSection {
                section: root.section.clone(),
                items: vec![node],
            }),
        }
    }

    sections.sort_by_key(|s| section_rank(&s.section));
    sections
}

fn section_rank(section: &str) -> usize {
    SECTION_PRIORITY
        .iter()
        .position(|s| *s == section)
        .unwrap_or(SECTION_PRIORITY.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::role_rights::PagePermission;

    fn item(label: &str, section: &str, parent: Option<&str>, order_by: i64) -> MenuItem {
        MenuItem {
            label: label.to_string(),
            path: Some(format!("/{}", label.to_lowercase().replace(' ', "-"))),
            icon: "circle".to_string(),
            section: section.to_string(),
            parent_menu: parent.map(str::to_string),
            status: MenuStatus::Active,
            order_by,
        }
    }

    fn menu() -> Vec<MenuItem> {
        let mut inactive = item("Archive", "CONTENT", None, 9);
        inactive.status = MenuStatus::Inactive;
        vec![
            item("Pages", "CONTENT", None, 8),
            item("Event List", "EVENT SECTION", Some(" Events "), 6),
            item("Events", "EVENT SECTION", None, 5),
            item("Dashboard", "MAIN", None, 1),
            item("Members", "MAIN", None, 2),
            item("Member List", "MAIN", Some("Members"), 4),
            item("Add Member", "MAIN", Some("Members"), 3),
            item("Reports", "INSIGHTS", None, 7),
            inactive,
        ]
    }

    fn rights_for(role: &str, pages: &[&str]) -> Vec<PermissionRecord> {
        vec![PermissionRecord {
            role: role.to_string(),
            permissions: pages
                .iter()
                .map(|p| PagePermission {
                    page: p.to_string(),
                    read: true,
                    write: false,
                    delete: false,
                })
                .collect(),
        }]
    }

    fn labels(section: &MenuSection) -> Vec<&str> {
        section.items.iter().map(|n| n.item.label.as_str()).collect()
    }

    #[test]
    fn test_role_without_rights_sees_all_active() {
        let sections = build_menu(&menu(), "guest", &[]);
        let names: Vec<&str> = sections.iter().map(|s| s.section.as_str()).collect();
        assert_eq!(names, vec!["MAIN", "EVENT SECTION", "CONTENT", "INSIGHTS"]);

        assert_eq!(labels(&sections[0]), vec!["Dashboard", "Members"]);
        assert_eq!(labels(&sections[2]), vec!["Pages"]);

        let members = &sections[0].items[1];
        let children: Vec<&str> = members
            .children
            .as_ref()
            .expect("members has children")
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        // ordered by order_by, not input order
        assert_eq!(children, vec!["Add Member", "Member List"]);

        assert!(sections[0].items[0].children.is_none());
    }

    #[test]
    fn test_parent_link_is_trimmed() {
        let sections = build_menu(&menu(), "guest", &[]);
        let events = &sections[1].items[0];
        assert_eq!(events.item.label, "Events");
        assert_eq!(events.children.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_only_readable_pages() {
        let rights = rights_for("volunteer", &["Dashboard"]);
        let sections = build_menu(&menu(), "volunteer", &rights);
        assert_eq!(sections.len(), 1);
        assert_eq!(labels(&sections[0]), vec!["Dashboard"]);
    }

    #[test]
    fn test_children_do_not_inherit_visibility() {
        let rights = rights_for("volunteer", &["Members", "Member List"]);
        let sections = build_menu(&menu(), "volunteer", &rights);
        let members = &sections[0].items[0];
        let children = members.children.as_ref().expect("one child readable");
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].label, "Member List");
    }

    #[test]
    fn test_orphans_are_dropped() {
        let rights = rights_for("volunteer", &["Member List", "Dashboard"]);
        let sections = build_menu(&menu(), "volunteer", &rights);
        assert_eq!(sections.len(), 1);
        assert_eq!(labels(&sections[0]), vec!["Dashboard"]);

        let mut items = menu();
        items.push(item("Lost", "MAIN", Some("Nowhere"), 0));
        let sections = build_menu(&items, "guest", &[]);
        assert!(sections
            .iter()
            .flat_map(|s| s.items.iter())
            .all(|n| n.item.label != "Lost"));
    }

    #[test]
    fn test_inactive_parent_hides_children() {
        let mut items = menu();
        items.push(item("Old Page", "CONTENT", Some("Archive"), 10));
        let sections = build_menu(&items, "guest", &[]);
        let content = sections.iter().find(|s| s.section == "CONTENT").unwrap();
        assert_eq!(labels(content), vec!["Pages"]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(build_menu(&[], "admin", &[]).is_empty());
        let rights = rights_for("nobody", &[]);
        assert!(build_menu(&menu(), "nobody", &rights).is_empty());
    }

    #[test]
    fn test_unlisted_sections_keep_discovery_order() {
        let items = vec![
            item("Zeta", "ZZZ", None, 1),
            item("Alpha", "AAA", None, 2),
            item("Home", "MAIN", None, 3),
        ];
        let sections = build_menu(&items, "guest", &[]);
        let names: Vec<&str> = sections.iter().map(|s| s.section.as_str()).collect();
        assert_eq!(names, vec!["MAIN", "ZZZ", "AAA"]);
    }

    #[test]
    fn test_menu_json() {
        let json = r#"[
            {"label":"Dashboard","path":"/dashboard","icon":"home",
             "section":"MAIN","status":"Active","order_by":1},
            {"label":"Members","icon":"users","section":"MAIN","parent_menu":"",
             "status":"Active","order_by":2},
            {"label":"Member List","path":"/members","section":"MAIN",
             "parent_menu":"Members","status":"Active","order_by":3},
            {"label":"Old","section":"MAIN","status":"Disabled","order_by":4}
        ]"#;
        let items: Vec<MenuItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items[3].status, MenuStatus::Inactive);
        assert!(items[1].is_root());

        let sections = build_menu(&items, "admin", &[]);
        let out = serde_json::to_value(&sections).unwrap();
        assert_eq!(out[0]["section"], "MAIN");
        assert_eq!(out[0]["items"][0]["label"], "Dashboard");
        assert!(out[0]["items"][0].get("children").is_none());
        assert_eq!(out[0]["items"][1]["children"][0]["label"], "Member List");
    }
}
