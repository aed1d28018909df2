//! Nested menu tree construction.
//!
//! Items are grouped by parent id once, then each level is expanded
//! depth-first. A path set tracks the ids on the current ancestor chain so
//! a looping chain (duplicate ids, or an item parented to itself and
//! reachable from the root) is reported instead of recursing forever.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::format::FormattedMenuItem;
use crate::models::MenuItem;

/// Default maximum nesting depth (roots are depth 1).
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// A menu item with its children, in the nested response form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemNode {
    #[serde(flatten)]
    pub item: FormattedMenuItem,
    pub children: Vec<MenuItemNode>,
}

/// Failures while nesting menu items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// An item id reappeared on its own ancestor chain.
    #[error("menu item {item_id} appears in its own ancestor chain")]
    Cycle { item_id: u64 },

    /// Nesting went deeper than the configured limit.
    #[error("menu tree exceeds maximum depth of {max_depth}")]
    TooDeep { max_depth: usize },
}

/// Build the tree of items under `parent_id` using [`DEFAULT_MAX_DEPTH`].
pub fn build_menu_tree(
    items: &[MenuItem],
    parent_id: u64,
) -> Result<Vec<MenuItemNode>, TreeError> {
    build_menu_tree_with_limit(items, parent_id, DEFAULT_MAX_DEPTH)
}

/// Build the tree of items under `parent_id`.
///
/// Siblings keep their relative input order. Items whose parent is never
/// reached from `parent_id` are left out.
pub fn build_menu_tree_with_limit(
    items: &[MenuItem],
    parent_id: u64,
    max_depth: usize,
) -> Result<Vec<MenuItemNode>, TreeError> {
    let mut by_parent: HashMap<u64, Vec<&MenuItem>> = HashMap::new();
    for item in items {
        by_parent.entry(item.parent_id).or_default().push(item);
    }

    let mut ancestors = HashSet::new();
    build_level(&by_parent, parent_id, 1, max_depth, &mut ancestors)
}

fn build_level(
    by_parent: &HashMap<u64, Vec<&MenuItem>>,
    parent_id: u64,
    depth: usize,
    max_depth: usize,
    ancestors: &mut HashSet<u64>,
) -> Result<Vec<MenuItemNode>, TreeError> {
    let Some(siblings) = by_parent.get(&parent_id) else {
        return Ok(Vec::new());
    };

    if depth > max_depth {
        return Err(TreeError::TooDeep { max_depth });
    }

    let mut nodes = Vec::with_capacity(siblings.len());
    for item in siblings {
        if !ancestors.insert(item.id) {
            return Err(TreeError::Cycle { item_id: item.id });
        }
        let children = build_level(by_parent, item.id, depth + 1, max_depth, ancestors)?;
        ancestors.remove(&item.id);

        nodes.push(MenuItemNode {
            item: FormattedMenuItem::from(*item),
            children,
        });
    }

    Ok(nodes)
}

/// Flatten a tree depth-first, parents before their children.
pub fn flatten_tree(nodes: &[MenuItemNode]) -> Vec<FormattedMenuItem> {
    let mut flat = Vec::new();
    push_flattened(nodes, &mut flat);
    flat
}

fn push_flattened(nodes: &[MenuItemNode], out: &mut Vec<FormattedMenuItem>) {
    for node in nodes {
        out.push(node.item.clone());
        push_flattened(&node.children, out);
    }
}

/// Total number of nodes in a forest.
pub fn count_nodes(nodes: &[MenuItemNode]) -> usize {
    nodes
        .iter()
        .map(|node| 1 + count_nodes(&node.children))
        .sum()
}
