//! Menu store abstraction.
//!
//! The host CMS owns menus, locations, and items. Everything this crate
//! reads goes through [`MenuStore`], so a different host backend only has
//! to implement the trait.
//!
//! # Implementations
//!
//! - [`MemoryMenuStore`] - immutable in-memory snapshot
//! - [`snapshot::load_snapshot`] - builds a `MemoryMenuStore` from a host export file

mod memory;
pub mod snapshot;

use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;

pub use memory::MemoryMenuStore;

use crate::models::{Menu, MenuItem, RegisteredLocation};

/// Read-only access to the host's menu data.
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// All menus, in the host's listing order.
    async fn list_menus(&self) -> Result<Vec<Menu>>;

    /// A single menu by id.
    async fn get_menu(&self, id: u64) -> Result<Option<Menu>>;

    /// Registered location slots, in registration order.
    async fn list_locations(&self) -> Result<Vec<RegisteredLocation>>;

    /// Location key → assigned menu id. An id of `0` means the slot was
    /// emptied.
    async fn get_location_assignments(&self) -> Result<BTreeMap<String, u64>>;

    /// Items of a menu, ordered by `order`. Unknown menus have no items.
    async fn get_menu_items(&self, menu_id: u64) -> Result<Vec<MenuItem>>;
}
