//! Structural checks over a menu's item list, used by `rest-menus check`.

use std::collections::{BTreeSet, HashSet};

use super::tree::{TreeError, build_menu_tree_with_limit, count_nodes, flatten_tree};
use crate::models::MenuItem;

/// Findings for one menu's items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeAudit {
    /// Number of items in the flat list.
    pub items: usize,
    /// Number of top-level items.
    pub roots: usize,
    /// Items whose parent is not in the menu, sorted.
    pub orphans: Vec<u64>,
    /// Ids that occur more than once, sorted.
    pub duplicate_ids: Vec<u64>,
    /// Nodes reachable from the root in the nested form.
    pub reachable: usize,
    /// Ids left out of the nested form (orphans and their descendants), sorted.
    pub unreachable: Vec<u64>,
    /// Tree construction failure, if any.
    pub error: Option<TreeError>,
}

impl TreeAudit {
    /// Whether the nested form can be served for this menu.
    pub fn is_buildable(&self) -> bool {
        self.error.is_none()
    }

    /// Whether every item shows up in the nested form.
    pub fn is_complete(&self) -> bool {
        self.is_buildable() && self.reachable == self.items
    }
}

/// Audit a flat item list.
pub fn audit_items(items: &[MenuItem], max_depth: usize) -> TreeAudit {
    let mut seen = HashSet::new();
    let mut duplicates = BTreeSet::new();
    for item in items {
        if !seen.insert(item.id) {
            duplicates.insert(item.id);
        }
    }

    let orphans: BTreeSet<u64> = items
        .iter()
        .filter(|item| !item.is_root() && !seen.contains(&item.parent_id))
        .map(|item| item.id)
        .collect();

    let (reachable, unreachable, error) = match build_menu_tree_with_limit(items, 0, max_depth) {
        Ok(tree) => {
            let placed: HashSet<u64> = flatten_tree(&tree).iter().map(|item| item.id).collect();
            let unreachable: BTreeSet<u64> = items
                .iter()
                .map(|item| item.id)
                .filter(|id| !placed.contains(id))
                .collect();
            (count_nodes(&tree), unreachable.into_iter().collect(), None)
        }
        Err(e) => (0, Vec::new(), Some(e)),
    };

    TreeAudit {
        items: items.len(),
        roots: items.iter().filter(|item| item.is_root()).count(),
        orphans: orphans.into_iter().collect(),
        duplicate_ids: duplicates.into_iter().collect(),
        reachable,
        unreachable,
        error,
    }
}
