//! REST menus test utilities.
//!
//! Fixture builders for menu items and host snapshots, plus assertion
//! helpers for JSON responses. Fixtures are produced as JSON in the host's
//! wire format so they can be deserialized into the kernel's models.

use serde::Serialize;
use serde_json::{Value as JsonValue, json};

/// Create a root-or-child test menu item with default values.
pub fn test_menu_item(id: u64, parent: u64) -> TestMenuItem {
    TestMenuItem {
        id,
        title: format!("Item {id}"),
        url: format!("/item-{id}"),
        parent,
        order: id as i64,
        item_type: "custom".to_string(),
        object: "custom".to_string(),
        object_id: id,
        target: String::new(),
        classes: Vec::new(),
        xfn: String::new(),
    }
}

/// A menu item builder in the host wire format.
#[derive(Debug, Clone, Serialize)]
pub struct TestMenuItem {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub parent: u64,
    pub order: i64,
    #[serde(rename = "type")]
    pub item_type: String,
    pub object: String,
    pub object_id: u64,
    pub target: String,
    pub classes: Vec<String>,
    pub xfn: String,
}

impl TestMenuItem {
    /// Set the title.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Set the URL.
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    /// Set the menu order.
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    /// Link to a host object (e.g., a page).
    pub fn linking(mut self, object: &str, object_id: u64) -> Self {
        self.item_type = "post_type".to_string();
        self.object = object.to_string();
        self.object_id = object_id;
        self
    }

    /// Open in a new window.
    pub fn in_new_window(mut self) -> Self {
        self.target = "_blank".to_string();
        self
    }

    /// Add a CSS class.
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Set XFN relationship tags.
    pub fn with_xfn(mut self, xfn: &str) -> Self {
        self.xfn = xfn.to_string();
        self
    }

    /// Serialize to the host wire format.
    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }
}

/// Start an empty snapshot.
pub fn test_snapshot() -> TestSnapshot {
    TestSnapshot::default()
}

/// A host snapshot builder.
#[derive(Debug, Clone, Default)]
pub struct TestSnapshot {
    menus: Vec<JsonValue>,
    locations: Vec<JsonValue>,
    assignments: serde_json::Map<String, JsonValue>,
}

impl TestSnapshot {
    /// Add a menu with items.
    pub fn with_menu(mut self, id: u64, name: &str, items: Vec<TestMenuItem>) -> Self {
        let slug = name.to_lowercase().replace(' ', "-");
        let items: Vec<JsonValue> = items.iter().map(TestMenuItem::to_json).collect();
        self.menus.push(json!({
            "id": id,
            "name": name,
            "slug": slug,
            "items": items,
        }));
        self
    }

    /// Register a location slot.
    pub fn with_location(mut self, key: &str, description: &str) -> Self {
        self.locations.push(json!({
            "location": key,
            "description": description,
        }));
        self
    }

    /// Assign a menu to a location key (`0` empties the slot).
    pub fn assign(mut self, key: &str, menu_id: u64) -> Self {
        self.assignments.insert(key.to_string(), json!(menu_id));
        self
    }

    /// The snapshot document.
    pub fn to_json(&self) -> JsonValue {
        json!({
            "menus": self.menus,
            "locations": self.locations,
            "assignments": self.assignments,
        })
    }
}

/// A small site: a nested main menu, a flat footer menu, an empty menu,
/// and a mix of assigned, emptied, and unassigned locations.
///
/// | Location | Assignment |
/// |----------|------------|
/// | primary  | Main (2)   |
/// | footer   | Footer (3) |
/// | mobile   | Main (2)   |
/// | social   | emptied (0)|
/// | sidebar  | none       |
pub fn sample_site() -> TestSnapshot {
    test_snapshot()
        .with_menu(
            2,
            "Main",
            vec![
                test_menu_item(10, 0).with_title("Home").with_url("/").with_order(1),
                test_menu_item(11, 0)
                    .with_title("About")
                    .with_url("/about")
                    .linking("page", 42)
                    .with_order(2),
                test_menu_item(12, 11)
                    .with_title("Team")
                    .with_url("/about/team")
                    .with_order(3),
                test_menu_item(13, 12)
                    .with_title("Jobs")
                    .with_url("/about/team/jobs")
                    .with_class("highlight")
                    .with_order(4),
                test_menu_item(14, 0)
                    .with_title("Blog")
                    .with_url("https://blog.example.com")
                    .in_new_window()
                    .with_xfn("me")
                    .with_order(5),
            ],
        )
        .with_menu(
            3,
            "Footer",
            vec![
                test_menu_item(20, 0).with_title("Privacy").with_order(1),
                test_menu_item(21, 0).with_title("Terms").with_order(2),
            ],
        )
        .with_menu(4, "Empty", vec![])
        .with_location("primary", "Primary Menu")
        .with_location("footer", "Footer Menu")
        .with_location("social", "Social Links")
        .with_location("sidebar", "Sidebar")
        .assign("primary", 2)
        .assign("footer", 3)
        .assign("mobile", 2)
        .assign("social", 0)
}

/// Assertion helpers for JSON content.
pub mod assert {
    use serde_json::Value;

    /// Assert that a JSON value has a specific key.
    pub fn has_key(value: &Value, key: &str) {
        assert!(
            value.get(key).is_some(),
            "Expected JSON to have key '{key}', got: {value}"
        );
    }

    /// Assert that a JSON error body carries the given code and status.
    pub fn error_code(body: &Value, code: &str, status: u16) {
        assert_eq!(body["code"], code, "unexpected error body: {body}");
        assert_eq!(body["data"]["status"], status, "unexpected error body: {body}");
        assert!(
            body["message"].as_str().is_some_and(|m| !m.is_empty()),
            "error body has no message: {body}"
        );
    }

    /// Collect the `id` of each element of a JSON array.
    pub fn ids(array: &Value) -> Vec<u64> {
        array
            .as_array()
            .map(|items| items.iter().filter_map(|i| i["id"].as_u64()).collect())
            .unwrap_or_default()
    }
}
