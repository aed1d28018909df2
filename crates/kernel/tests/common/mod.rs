#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! [`TestApp`] wraps the REAL router and state built over an in-memory
//! snapshot, so tests exercise the same code paths as the server.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{Result, bail};
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use rest_menus_kernel::models::{Menu, MenuItem, RegisteredLocation};
use rest_menus_kernel::store::MenuStore;
use rest_menus_kernel::store::snapshot::MenuSnapshot;
use rest_menus_kernel::{AppState, Config, routes};
use rest_menus_test_utils::{TestSnapshot, sample_site};

/// Default API prefix.
pub const PREFIX: &str = "/wp-json/wp-rest-menu/v1";

/// Test application wrapper using the REAL kernel routes and state.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// App over the sample site with default configuration.
    pub fn new() -> Self {
        Self::with_snapshot(sample_site(), &Config::default())
    }

    /// App over a custom snapshot.
    pub fn with_snapshot(snapshot: TestSnapshot, config: &Config) -> Self {
        let snapshot: MenuSnapshot =
            serde_json::from_value(snapshot.to_json()).expect("fixture snapshot must parse");
        Self::with_store(Arc::new(snapshot.into_store()), config)
    }

    /// App over any store.
    pub fn with_store(store: Arc<dyn MenuStore>, config: &Config) -> Self {
        let state = AppState::new(config, store);
        let router = routes::build_router(state.clone());
        Self { router, state }
    }

    /// Send a request to the test application.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    /// GET a URI and parse the JSON body.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .request(Request::get(uri).body(Body::empty()).unwrap())
            .await;
        let status = response.status();
        (status, response_json(response).await)
    }

    /// GET a URI and return the raw body text.
    pub async fn get_text(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .request(Request::get(uri).body(Body::empty()).unwrap())
            .await;
        let status = response.status();
        (status, response_text(response).await)
    }
}

pub async fn response_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap_or_else(|_| {
        let text = String::from_utf8_lossy(&body);
        panic!("Failed to parse JSON: {text}");
    })
}

pub async fn response_text(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&body).to_string()
}

/// A store whose backend is down.
pub struct FailingStore;

#[async_trait]
impl MenuStore for FailingStore {
    async fn list_menus(&self) -> Result<Vec<Menu>> {
        bail!("menu backend unavailable")
    }

    async fn get_menu(&self, _id: u64) -> Result<Option<Menu>> {
        bail!("menu backend unavailable")
    }

    async fn list_locations(&self) -> Result<Vec<RegisteredLocation>> {
        bail!("menu backend unavailable")
    }

    async fn get_location_assignments(&self) -> Result<BTreeMap<String, u64>> {
        bail!("menu backend unavailable")
    }

    async fn get_menu_items(&self, _menu_id: u64) -> Result<Vec<MenuItem>> {
        bail!("menu backend unavailable")
    }
}
