//! Menu item record.
//!
//! Items of one menu form a forest through `parent_id`; roots have a
//! parent of `0`. Serde names follow the host's wire names so snapshot
//! exports deserialize without a translation layer.

use serde::{Deserialize, Serialize};

/// Parent id carried by top-level items.
pub const ROOT_PARENT_ID: u64 = 0;

/// A single navigable entry belonging to a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Item identifier (unique within the host, not just the menu).
    pub id: u64,

    /// Link text.
    #[serde(default)]
    pub title: String,

    /// Link destination.
    #[serde(default)]
    pub url: String,

    /// Parent item id, or `0` for a root item.
    #[serde(rename = "parent", default)]
    pub parent_id: u64,

    /// Position within the menu (host `menu_order`).
    #[serde(default)]
    pub order: i64,

    /// Link kind: "custom", "post_type", "taxonomy", ...
    #[serde(rename = "type", default)]
    pub item_type: String,

    /// Kind of the linked object: "page", "category", "custom", ...
    #[serde(rename = "object", default)]
    pub object_type: String,

    /// Id of the linked object.
    #[serde(default)]
    pub object_id: u64,

    /// Link target attribute (e.g., "_blank"); empty for none.
    #[serde(default)]
    pub target: String,

    /// CSS classes, in the order entered.
    #[serde(rename = "classes", default)]
    pub css_classes: Vec<String>,

    /// XFN link relationship (`rel`) tags.
    #[serde(rename = "xfn", default)]
    pub link_relationship: String,
}

impl MenuItem {
    /// Whether this item sits at the top level of its menu.
    pub fn is_root(&self) -> bool {
        self.parent_id == ROOT_PARENT_ID
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_host_field_names() {
        let item: MenuItem = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "About",
            "url": "/about",
            "parent": 3,
            "order": 2,
            "type": "post_type",
            "object": "page",
            "object_id": 42,
            "target": "_blank",
            "classes": ["menu-about", "highlight"],
            "xfn": "nofollow"
        }))
        .unwrap();

        assert_eq!(item.parent_id, 3);
        assert_eq!(item.item_type, "post_type");
        assert_eq!(item.object_type, "page");
        assert_eq!(item.css_classes, vec!["menu-about", "highlight"]);
        assert_eq!(item.link_relationship, "nofollow");
        assert!(!item.is_root());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let item: MenuItem = serde_json::from_value(serde_json::json!({ "id": 1 })).unwrap();
        assert!(item.is_root());
        assert_eq!(item.order, 0);
        assert!(item.css_classes.is_empty());
        assert!(item.title.is_empty());
    }
}
