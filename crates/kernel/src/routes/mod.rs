//! HTTP route handlers.
//!
//! The menu API is registered from the [`table::ROUTES`] table and nested
//! under the configured prefix; health and metrics live at the root.

pub mod health;
mod locations;
mod menus;
pub mod metrics;
pub mod params;
pub mod table;

use axum::Router;

use crate::error::AppError;
use crate::middleware::track_metrics;
use crate::state::AppState;

/// Build the complete application router.
///
/// Transport layers (CORS, tracing) are added by the binary.
pub fn build_router(state: AppState) -> Router {
    let prefix = state.api_prefix().to_string();

    Router::new()
        .nest(&prefix, table::api_router())
        .merge(health::router())
        .merge(metrics::router())
        .fallback(no_route)
        .method_not_allowed_fallback(no_route)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            track_metrics,
        ))
        .with_state(state)
}

async fn no_route() -> AppError {
    AppError::NoRoute
}
