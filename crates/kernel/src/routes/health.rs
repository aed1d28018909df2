//! Health check endpoint.
//!
//! Returns 200 OK when the menu store answers, 503 Service Unavailable
//! otherwise.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    menus: usize,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.menus().store().list_menus().await {
        Ok(menus) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                menus: menus.len(),
            }),
        ),
        Err(e) => {
            warn!(error = %e, "menu store health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy",
                    menus: 0,
                }),
            )
        }
    }
}

/// Create the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
