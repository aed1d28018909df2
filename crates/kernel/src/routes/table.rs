//! Route table for the menu API.
//!
//! Every operation is declared once here with its path, host-style pattern,
//! and argument schema. The table drives both router registration and the
//! namespace index document served at the API prefix. All operations are
//! read-only `GET`s.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::routing::{MethodRouter, get};
use axum::{Json, Router};
use serde::Serialize;

use super::{locations, menus};
use crate::state::AppState;

/// Methods accepted by every route in the table.
pub const READ_METHODS: &[&str] = &["GET"];

/// The operation a route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListMenus,
    GetMenu,
    ListLocations,
    GetMenuByLocation,
}

/// A declared query argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteArg {
    pub name: &'static str,
    pub arg_type: &'static str,
    pub default: Option<bool>,
    pub required: bool,
}

/// A registered route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpec {
    pub operation: Operation,
    /// Router path relative to the API prefix.
    pub path: &'static str,
    /// Host-style pattern shown in the namespace index.
    pub pattern: &'static str,
    pub args: &'static [RouteArg],
}

const NESTED_ARG: RouteArg = RouteArg {
    name: "nested",
    arg_type: "boolean",
    default: Some(false),
    required: false,
};

/// Every menu API route.
pub const ROUTES: &[RouteSpec] = &[
    RouteSpec {
        operation: Operation::ListMenus,
        path: "/menus",
        pattern: "/menus",
        args: &[NESTED_ARG],
    },
    RouteSpec {
        operation: Operation::GetMenu,
        path: "/menus/{id}",
        pattern: "/menus/(?P<id>[0-9]+)",
        args: &[NESTED_ARG],
    },
    RouteSpec {
        operation: Operation::ListLocations,
        path: "/locations",
        pattern: "/locations",
        args: &[],
    },
    RouteSpec {
        operation: Operation::GetMenuByLocation,
        path: "/locations/{location}",
        pattern: "/locations/(?P<location>[a-zA-Z0-9_-]+)",
        args: &[NESTED_ARG],
    },
];

impl RouteSpec {
    fn handler(&self) -> MethodRouter<AppState> {
        match self.operation {
            Operation::ListMenus => get(menus::list_menus),
            Operation::GetMenu => get(menus::get_menu),
            Operation::ListLocations => get(locations::list_locations),
            Operation::GetMenuByLocation => get(locations::get_menu_by_location),
        }
    }
}

/// Register the table, plus the namespace index at the prefix root.
pub fn api_router() -> Router<AppState> {
    ROUTES.iter().fold(
        Router::new().route("/", get(namespace_index)),
        |router, spec| router.route(spec.path, spec.handler()),
    )
}

#[derive(Debug, Serialize)]
pub struct ArgSchema {
    #[serde(rename = "type")]
    pub arg_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    pub required: bool,
}

#[derive(Debug, Serialize)]
pub struct RouteDescription {
    pub methods: &'static [&'static str],
    pub args: BTreeMap<&'static str, ArgSchema>,
}

#[derive(Debug, Serialize)]
pub struct NamespaceIndex {
    pub namespace: String,
    pub routes: BTreeMap<String, RouteDescription>,
}

/// Describe the route table under `namespace`.
pub fn describe(namespace: &str) -> NamespaceIndex {
    let routes = ROUTES
        .iter()
        .map(|spec| {
            let args = spec
                .args
                .iter()
                .map(|arg| {
                    (
                        arg.name,
                        ArgSchema {
                            arg_type: arg.arg_type,
                            default: arg.default,
                            required: arg.required,
                        },
                    )
                })
                .collect();
            (
                format!("/{namespace}{}", spec.pattern),
                RouteDescription {
                    methods: READ_METHODS,
                    args,
                },
            )
        })
        .collect();

    NamespaceIndex {
        namespace: namespace.to_string(),
        routes,
    }
}

async fn namespace_index(State(state): State<AppState>) -> Json<NamespaceIndex> {
    Json(describe(state.namespace()))
}
