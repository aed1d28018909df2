//! Cross-referencing between location slots, their assignments, and menus.

use std::collections::BTreeMap;

use crate::models::{MenuLocation, RegisteredLocation};

/// Outcome of resolving a location key against the registry and assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationResolution {
    /// The key is neither registered nor assigned.
    Unknown,
    /// The key exists but no menu is bound to it.
    Unassigned,
    /// The key is bound to this menu id.
    Assigned(u64),
}

/// Keys of the locations bound to `menu_id`, in key order.
pub fn locations_for_menu(assignments: &BTreeMap<String, u64>, menu_id: u64) -> Vec<String> {
    assignments
        .iter()
        .filter(|(_, assigned)| **assigned == menu_id)
        .map(|(key, _)| key.clone())
        .collect()
}

/// Join registered locations with their assignments.
///
/// An assignment of `0` is how the host records an emptied slot, so it is
/// reported as unassigned.
pub fn resolve_locations(
    registered: Vec<RegisteredLocation>,
    assignments: &BTreeMap<String, u64>,
) -> Vec<MenuLocation> {
    registered
        .into_iter()
        .map(|location| {
            // The host's list reports an emptied slot as 0; here it is null.
            let assigned_menu_id = assignments.get(&location.key).copied().filter(|id| *id != 0);
            MenuLocation {
                key: location.key,
                description: location.description,
                assigned_menu_id,
            }
        })
        .collect()
}

/// Resolve a location key.
///
/// A key counts as known when it is registered or carries an assignment;
/// hosts keep assignments for slots a theme has stopped registering.
pub fn resolve_location(
    key: &str,
    registered: &[RegisteredLocation],
    assignments: &BTreeMap<String, u64>,
) -> LocationResolution {
    match assignments.get(key) {
        Some(&menu_id) if menu_id != 0 => LocationResolution::Assigned(menu_id),
        Some(_) => LocationResolution::Unassigned,
        None if registered.iter().any(|l| l.key == key) => LocationResolution::Unassigned,
        None => LocationResolution::Unknown,
    }
}

/// Whether `key` has the shape of a location key (`[a-zA-Z0-9_-]+`).
pub fn is_valid_location_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
