//! Host export snapshots.
//!
//! A snapshot is a YAML or JSON export of the host's menus, location
//! registry, and location assignments. It is loaded once at startup into a
//! [`MemoryMenuStore`]. The format is chosen by file extension
//! (`.yml`/`.yaml` or `.json`).
//!
//! ```yaml
//! menus:
//!   - id: 2
//!     name: Main
//!     slug: main
//!     items:
//!       - { id: 10, title: Home, url: /, parent: 0, order: 1 }
//! locations:
//!   - { location: primary, description: Primary Menu }
//! assignments:
//!   primary: 2
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::MemoryMenuStore;
use crate::models::{Menu, MenuItem, RegisteredLocation};

/// Maximum snapshot file size (32 MB).
const MAX_SNAPSHOT_SIZE: u64 = 32 * 1024 * 1024;

/// Snapshot serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Yaml,
    Json,
}

impl SnapshotFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yml" | "yaml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// A menu together with its items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMenu {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// The full export document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuSnapshot {
    #[serde(default)]
    pub menus: Vec<SnapshotMenu>,
    #[serde(default)]
    pub locations: Vec<RegisteredLocation>,
    #[serde(default)]
    pub assignments: BTreeMap<String, u64>,
}

impl MenuSnapshot {
    /// Parse snapshot text.
    pub fn parse(text: &str, format: SnapshotFormat) -> Result<Self> {
        match format {
            SnapshotFormat::Yaml => serde_yml::from_str(text).context("invalid YAML snapshot"),
            SnapshotFormat::Json => serde_json::from_str(text).context("invalid JSON snapshot"),
        }
    }

    /// Build the in-memory store.
    pub fn into_store(self) -> MemoryMenuStore {
        let mut store = MemoryMenuStore::new();
        for menu in self.menus {
            store = store.with_menu(Menu::new(menu.id, menu.name, menu.slug), menu.items);
        }
        for location in self.locations {
            store = store.with_location(location.key, location.description);
        }
        for (key, menu_id) in self.assignments {
            store = store.with_assignment(key, menu_id);
        }
        store
    }
}

/// Read and parse a snapshot file.
pub fn read_snapshot(path: &Path) -> Result<MenuSnapshot> {
    let Some(format) = SnapshotFormat::from_path(path) else {
        bail!(
            "unsupported snapshot extension for {} (expected .yml, .yaml, or .json)",
            path.display()
        );
    };

    let size = std::fs::metadata(path)
        .with_context(|| format!("failed to stat snapshot {}", path.display()))?
        .len();
    if size > MAX_SNAPSHOT_SIZE {
        bail!(
            "snapshot {} is {size} bytes, larger than the {MAX_SNAPSHOT_SIZE} byte limit",
            path.display()
        );
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;

    MenuSnapshot::parse(&text, format).with_context(|| format!("in {}", path.display()))
}

/// Load a snapshot file into a [`MemoryMenuStore`].
pub fn load_snapshot(path: &Path) -> Result<MemoryMenuStore> {
    let snapshot = read_snapshot(path)?;

    let item_count: usize = snapshot.menus.iter().map(|m| m.items.len()).sum();
    for (key, menu_id) in &snapshot.assignments {
        if *menu_id != 0 && !snapshot.menus.iter().any(|m| m.id == *menu_id) {
            warn!(location = %key, menu_id, "location assigned to a menu missing from the snapshot");
        }
    }

    info!(
        path = %path.display(),
        menus = snapshot.menus.len(),
        items = item_count,
        locations = snapshot.locations.len(),
        "menu snapshot loaded"
    );

    Ok(snapshot.into_store())
}
