//! REST menus kernel library.
//!
//! Read-only HTTP endpoints over a host CMS's navigation menus, locations,
//! and menu item trees. The main entry point for running the server is the
//! `rest-menus` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
