//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::menu::DEFAULT_MAX_DEPTH;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Path to the host menu snapshot (YAML or JSON).
    pub menu_snapshot: Option<PathBuf>,

    /// REST root the namespace is mounted under (default: /wp-json).
    pub api_root: String,

    /// Route namespace (default: wp-rest-menu/v1).
    pub api_namespace: String,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,

    /// Maximum nesting depth for menu trees (default: 64).
    pub max_menu_depth: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let menu_snapshot = lookup("MENU_SNAPSHOT")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let api_root = lookup("API_ROOT").unwrap_or_else(|| "/wp-json".to_string());

        let api_namespace =
            lookup("API_NAMESPACE").unwrap_or_else(|| "wp-rest-menu/v1".to_string());

        if api_namespace.trim_matches('/').is_empty() {
            anyhow::bail!("API_NAMESPACE must not be empty");
        }

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec!["*".to_string()]);

        let max_menu_depth = match lookup("MAX_MENU_DEPTH") {
            Some(v) => v
                .parse()
                .context("MAX_MENU_DEPTH must be a positive integer")?,
            None => DEFAULT_MAX_DEPTH,
        };
        if max_menu_depth == 0 {
            anyhow::bail!("MAX_MENU_DEPTH must be a positive integer");
        }

        Ok(Self {
            port,
            menu_snapshot,
            api_root,
            api_namespace,
            cors_allowed_origins,
            max_menu_depth,
        })
    }

    /// Namespace without surrounding slashes (e.g., "wp-rest-menu/v1").
    pub fn namespace(&self) -> String {
        self.api_namespace.trim_matches('/').to_string()
    }

    /// Full path prefix the API routes are nested under
    /// (e.g., "/wp-json/wp-rest-menu/v1").
    pub fn api_prefix(&self) -> String {
        let root = self.api_root.trim_matches('/');
        let namespace = self.namespace();
        if root.is_empty() {
            format!("/{namespace}")
        } else {
            format!("/{root}/{namespace}")
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            menu_snapshot: None,
            api_root: "/wp-json".to_string(),
            api_namespace: "wp-rest-menu/v1".to_string(),
            cors_allowed_origins: vec!["*".to_string()],
            max_menu_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
