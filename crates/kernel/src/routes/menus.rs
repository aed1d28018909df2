//! Menu endpoints.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;
use tracing::debug;

use super::params::{MenuIdSegment, Nested, parse_menu_id};
use crate::error::{AppError, AppResult};
use crate::menu::{MenuError, MenuItems};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub(super) struct MenuSummaryResponse {
    id: u64,
    name: String,
    slug: String,
    locations: Vec<String>,
    items: MenuItems,
}

#[derive(Debug, Serialize)]
pub(super) struct MenuResponse {
    id: u64,
    name: String,
    slug: String,
    items: MenuItems,
}

/// `GET /menus`: every menu with its locations and items.
pub(super) async fn list_menus(
    State(state): State<AppState>,
    Nested(nested): Nested,
) -> AppResult<Json<Vec<MenuSummaryResponse>>> {
    let service = state.menus();
    let menus = service.menus_with_locations().await?;
    debug!(count = menus.len(), nested, "listing menus");

    let mut response = Vec::with_capacity(menus.len());
    for (menu, locations) in menus {
        let items = service.items(menu.id, nested).await?;
        response.push(MenuSummaryResponse {
            id: menu.id,
            name: menu.name,
            slug: menu.slug,
            locations,
            items,
        });
    }

    Ok(Json(response))
}

/// `GET /menus/{id}`: one menu with its items.
pub(super) async fn get_menu(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Nested(nested): Nested,
) -> AppResult<Json<MenuResponse>> {
    let id = match parse_menu_id(&segment) {
        MenuIdSegment::Id(id) => id,
        MenuIdSegment::OutOfRange => {
            debug!(%segment, "menu id out of range");
            return Err(MenuError::MenuNotFound(u64::MAX).into());
        }
        MenuIdSegment::Invalid => return Err(AppError::NoRoute),
    };

    let service = state.menus();
    let menu = service.menu(id).await?;
    let items = service.items(menu.id, nested).await?;

    Ok(Json(MenuResponse {
        id: menu.id,
        name: menu.name,
        slug: menu.slug,
        items,
    }))
}
