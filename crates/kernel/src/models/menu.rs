//! Navigation menu record.

use serde::{Deserialize, Serialize};

/// A named, ordered collection of navigational items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    /// Host term identifier.
    pub id: u64,

    /// Display name (e.g., "Main Navigation").
    pub name: String,

    /// URL-safe machine name (e.g., "main-navigation").
    #[serde(default)]
    pub slug: String,
}

impl Menu {
    pub fn new(id: u64, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
        }
    }
}
