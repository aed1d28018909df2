//! Menu formatting, nesting, and lookup.
//!
//! [`MenuService`] sits between the HTTP handlers and the [`MenuStore`]:
//! it resolves menus and locations and turns a menu's flat item list into
//! either the flat or the nested response form.

mod audit;
mod format;
mod lookup;
mod tree;

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

pub use audit::{TreeAudit, audit_items};
pub use format::{FormattedMenuItem, format_menu_items};
pub use lookup::{
    LocationResolution, is_valid_location_key, locations_for_menu, resolve_location,
    resolve_locations,
};
pub use tree::{
    DEFAULT_MAX_DEPTH, MenuItemNode, TreeError, build_menu_tree, build_menu_tree_with_limit,
    count_nodes, flatten_tree,
};

use crate::models::menu_item::ROOT_PARENT_ID;
use crate::models::{Menu, MenuLocation};
use crate::store::MenuStore;

/// Errors from menu lookups.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("menu {0} not found")]
    MenuNotFound(u64),

    #[error("menu location '{0}' not found")]
    LocationNotFound(String),

    #[error("no menu assigned to location '{0}'")]
    NotAssigned(String),

    #[error("menu {menu_id} has an invalid item tree: {source}")]
    InvalidTree {
        menu_id: u64,
        #[source]
        source: TreeError,
    },

    #[error("menu store error: {0:#}")]
    Store(#[from] anyhow::Error),
}

/// A menu's items in either response form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MenuItems {
    Flat(Vec<FormattedMenuItem>),
    Nested(Vec<MenuItemNode>),
}

/// A registered location with its assignment and the assigned menu's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSummary {
    pub location: MenuLocation,
    /// `None` when unassigned or when the assigned menu no longer exists.
    pub menu_name: Option<String>,
}

/// Read-side menu operations over a [`MenuStore`].
pub struct MenuService {
    store: Arc<dyn MenuStore>,
    max_depth: usize,
}

impl MenuService {
    pub fn new(store: Arc<dyn MenuStore>, max_depth: usize) -> Self {
        Self { store, max_depth }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn MenuStore> {
        &self.store
    }

    /// All menus, each with the keys of the locations it is assigned to.
    pub async fn menus_with_locations(&self) -> Result<Vec<(Menu, Vec<String>)>, MenuError> {
        let menus = self.store.list_menus().await?;
        let assignments = self.store.get_location_assignments().await?;

        Ok(menus
            .into_iter()
            .map(|menu| {
                let keys = locations_for_menu(&assignments, menu.id);
                (menu, keys)
            })
            .collect())
    }

    /// A single menu by id.
    pub async fn menu(&self, id: u64) -> Result<Menu, MenuError> {
        match self.store.get_menu(id).await? {
            Some(menu) => Ok(menu),
            None => {
                debug!(menu_id = id, "menu not found");
                Err(MenuError::MenuNotFound(id))
            }
        }
    }

    /// A menu's items, flat or nested.
    pub async fn items(&self, menu_id: u64, nested: bool) -> Result<MenuItems, MenuError> {
        let items = self.store.get_menu_items(menu_id).await?;

        if !nested {
            return Ok(MenuItems::Flat(format_menu_items(&items)));
        }

        build_menu_tree_with_limit(&items, ROOT_PARENT_ID, self.max_depth)
            .map(MenuItems::Nested)
            .map_err(|source| {
                warn!(menu_id, error = %source, "cannot nest menu items");
                MenuError::InvalidTree { menu_id, source }
            })
    }

    /// All registered locations with their assignments.
    pub async fn locations(&self) -> Result<Vec<LocationSummary>, MenuError> {
        let registered = self.store.list_locations().await?;
        let assignments = self.store.get_location_assignments().await?;

        let mut summaries = Vec::with_capacity(registered.len());
        for location in resolve_locations(registered, &assignments) {
            let menu_name = match location.assigned_menu_id {
                Some(id) => self.store.get_menu(id).await?.map(|m| m.name),
                None => None,
            };
            summaries.push(LocationSummary {
                location,
                menu_name,
            });
        }

        Ok(summaries)
    }

    /// The menu bound to a location key.
    pub async fn menu_for_location(&self, key: &str) -> Result<Menu, MenuError> {
        let registered = self.store.list_locations().await?;
        let assignments = self.store.get_location_assignments().await?;

        let menu_id = match resolve_location(key, &registered, &assignments) {
            LocationResolution::Assigned(id) => id,
            LocationResolution::Unassigned => {
                debug!(location = %key, "location has no menu");
                return Err(MenuError::NotAssigned(key.to_string()));
            }
            LocationResolution::Unknown => {
                debug!(location = %key, "location not registered");
                return Err(MenuError::LocationNotFound(key.to_string()));
            }
        };

        self.store.get_menu(menu_id).await?.ok_or_else(|| {
            debug!(location = %key, menu_id, "location points at a missing menu");
            MenuError::NotAssigned(key.to_string())
        })
    }
}
