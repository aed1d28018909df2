//! Menu data models as read from the host store.
//!
//! These are read-only snapshots: nothing in this crate creates, updates,
//! or deletes them.

pub mod location;
pub mod menu;
pub mod menu_item;

pub use location::{MenuLocation, RegisteredLocation};
pub use menu::Menu;
pub use menu_item::MenuItem;
