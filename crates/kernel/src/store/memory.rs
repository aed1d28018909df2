//! In-memory menu store.

use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;

use super::MenuStore;
use crate::models::{Menu, MenuItem, RegisteredLocation};

/// A menu store holding a fixed snapshot of host data.
///
/// Built once with the `with_*` methods and then shared read-only.
#[derive(Debug, Clone, Default)]
pub struct MemoryMenuStore {
    menus: BTreeMap<u64, (Menu, Vec<MenuItem>)>,
    locations: Vec<RegisteredLocation>,
    assignments: BTreeMap<String, u64>,
}

impl MemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a menu and its items. Items are stably sorted by `order`;
    /// a menu with the same id is replaced.
    pub fn with_menu(mut self, menu: Menu, mut items: Vec<MenuItem>) -> Self {
        items.sort_by_key(|item| item.order);
        self.menus.insert(menu.id, (menu, items));
        self
    }

    /// Register a location slot. Re-registering a key updates its description.
    pub fn with_location(mut self, key: impl Into<String>, description: impl Into<String>) -> Self {
        let location = RegisteredLocation::new(key, description);
        match self.locations.iter_mut().find(|l| l.key == location.key) {
            Some(existing) => existing.description = location.description,
            None => self.locations.push(location),
        }
        self
    }

    /// Bind a location key to a menu id.
    pub fn with_assignment(mut self, key: impl Into<String>, menu_id: u64) -> Self {
        self.assignments.insert(key.into(), menu_id);
        self
    }

    /// Number of menus held.
    pub fn menu_count(&self) -> usize {
        self.menus.len()
    }
}

#[async_trait]
impl MenuStore for MemoryMenuStore {
    async fn list_menus(&self) -> Result<Vec<Menu>> {
        // Host lists menus by name.
        let mut menus: Vec<Menu> = self.menus.values().map(|(menu, _)| menu.clone()).collect();
        menus.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(menus)
    }

    async fn get_menu(&self, id: u64) -> Result<Option<Menu>> {
        Ok(self.menus.get(&id).map(|(menu, _)| menu.clone()))
    }

    async fn list_locations(&self) -> Result<Vec<RegisteredLocation>> {
        Ok(self.locations.clone())
    }

    async fn get_location_assignments(&self) -> Result<BTreeMap<String, u64>> {
        Ok(self.assignments.clone())
    }

    async fn get_menu_items(&self, menu_id: u64) -> Result<Vec<MenuItem>> {
        Ok(self
            .menus
            .get(&menu_id)
            .map(|(_, items)| items.clone())
            .unwrap_or_default())
    }
}
