//! Flat projection of menu items into their JSON response shape.

use serde::{Deserialize, Serialize};

use crate::models::MenuItem;

/// A menu item as it appears in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedMenuItem {
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

impl From<&MenuItem> for FormattedMenuItem {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            url: item.url.clone(),
            parent: item.parent_id,
            order: item.order,
            item_type: item.item_type.clone(),
            object: item.object_type.clone(),
            object_id: item.object_id,
            target: item.target.clone(),
            classes: item.css_classes.clone(),
            xfn: item.link_relationship.clone(),
        }
    }
}

/// Project menu items into the flat response form.
///
/// Output order is input order; the store is responsible for sorting.
pub fn format_menu_items(items: &[MenuItem]) -> Vec<FormattedMenuItem> {
    items.iter().map(FormattedMenuItem::from).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use rest_menus_test_utils::test_menu_item;

    fn item(id: u64, parent: u64) -> MenuItem {
        serde_json::from_value(test_menu_item(id, parent).to_json()).unwrap()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(format_menu_items(&[]).is_empty());
    }

    #[test]
    fn preserves_length_and_order() {
        let items = vec![item(5, 0), item(2, 5), item(9, 0), item(1, 9)];
        let formatted = format_menu_items(&items);

        let ids: Vec<u64> = formatted.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![5, 2, 9, 1]);
    }

    #[test]
    fn serializes_with_response_field_names() {
        let mut source = item(3, 1);
        source.css_classes = vec!["a".to_string(), "b".to_string()];
        source.link_relationship = "friend".to_string();

        let json = serde_json::to_value(FormattedMenuItem::from(&source)).unwrap();
        let obj = json.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "classes",
                "id",
                "object",
                "object_id",
                "order",
                "parent",
                "target",
                "title",
                "type",
                "url",
                "xfn"
            ]
        );
        assert_eq!(json["parent"], 1);
        assert_eq!(json["classes"], serde_json::json!(["a", "b"]));
        assert_eq!(json["xfn"], "friend");
    }
}
