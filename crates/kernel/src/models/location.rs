//! Menu location models.
//!
//! A location is a named slot in the site layout ("primary", "footer").
//! The host keeps the registry of slots separate from the slot→menu
//! assignments, so the two are modelled separately and joined on read.

use serde::{Deserialize, Serialize};

/// A location slot as registered by the host theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredLocation {
    /// Location key (e.g., "primary").
    #[serde(rename = "location")]
    pub key: String,

    /// Human-readable description shown in the host admin.
    #[serde(default)]
    pub description: String,
}

impl RegisteredLocation {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

/// A registered location joined with its current assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLocation {
    /// Location key.
    #[serde(rename = "location")]
    pub key: String,

    /// Human-readable description.
    pub description: String,

    /// Menu bound to this slot, if any.
    #[serde(rename = "menu_id")]
    pub assigned_menu_id: Option<u64>,
}
