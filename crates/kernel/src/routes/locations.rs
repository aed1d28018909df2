//! Menu location endpoints.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use super::params::Nested;
use crate::error::{AppError, AppResult};
use crate::menu::{MenuItems, is_valid_location_key};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub(super) struct LocationResponse {
    location: String,
    description: String,
    menu_id: Option<u64>,
    menu_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct LocationMenuResponse {
    location: String,
    id: u64,
    name: String,
    slug: String,
    items: MenuItems,
}

/// `GET /locations`: every registered location and what is assigned to it.
pub(super) async fn list_locations(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<LocationResponse>>> {
    let locations = state.menus().locations().await?;

    Ok(Json(
        locations
            .into_iter()
            .map(|summary| LocationResponse {
                location: summary.location.key,
                description: summary.location.description,
                menu_id: summary.location.assigned_menu_id,
                menu_name: summary.menu_name,
            })
            .collect(),
    ))
}

/// `GET /locations/{location}`: the menu assigned to a location.
pub(super) async fn get_menu_by_location(
    State(state): State<AppState>,
    Path(location): Path<String>,
    Nested(nested): Nested,
) -> AppResult<Json<LocationMenuResponse>> {
    if !is_valid_location_key(&location) {
        return Err(AppError::NoRoute);
    }

    let service = state.menus();
    let menu = service.menu_for_location(&location).await?;
    let items = service.items(menu.id, nested).await?;

    Ok(Json(LocationMenuResponse {
        location,
        id: menu.id,
        name: menu.name,
        slug: menu.slug,
        items,
    }))
}
