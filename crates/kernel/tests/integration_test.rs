#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for the menu API.
//!
//! These drive the real router over the sample site fixture:
//!
//! - Main (2): Home(10), About(11) > Team(12) > Jobs(13), Blog(14)
//! - Footer (3): Privacy(20), Terms(21)
//! - Empty (4)
//! - locations: primary→2, footer→3, mobile→2 (unregistered), social→0,
//!   sidebar unassigned

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use rest_menus_kernel::Config;
use rest_menus_test_utils::{assert, test_menu_item, test_snapshot};

mod common;
use common::{FailingStore, PREFIX, TestApp};

// =============================================================================
// List menus
// =============================================================================

#[tokio::test]
async fn list_menus_returns_every_menu_by_name() {
    let app = TestApp::new();
    let (status, body) = app.get_json(&format!("{PREFIX}/menus")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(assert::ids(&body), vec![4, 3, 2]);

    let main = &body[2];
    assert_eq!(main["name"], "Main");
    assert_eq!(main["slug"], "main");
    assert_eq!(main["locations"], json!(["mobile", "primary"]));
    assert_eq!(assert::ids(&main["items"]), vec![10, 11, 12, 13, 14]);

    assert_eq!(body[0]["locations"], json!([]));
    assert_eq!(body[0]["items"], json!([]));
}

#[tokio::test]
async fn list_menus_flat_items_carry_every_field() {
    let app = TestApp::new();
    let (_, body) = app.get_json(&format!("{PREFIX}/menus")).await;

    let blog = &body[2]["items"][4];
    assert_eq!(
        blog,
        &json!({
            "id": 14,
            "title": "Blog",
            "url": "https://blog.example.com",
            "parent": 0,
            "order": 5,
            "type": "custom",
            "object": "custom",
            "object_id": 14,
            "target": "_blank",
            "classes": [],
            "xfn": "me"
        })
    );

    let jobs = &body[2]["items"][3];
    assert_eq!(jobs["parent"], 12);
    assert_eq!(jobs["classes"], json!(["highlight"]));
    assert!(jobs.get("children").is_none());
}

#[tokio::test]
async fn list_menus_nested() {
    let app = TestApp::new();
    let (status, body) = app.get_json(&format!("{PREFIX}/menus?nested=true")).await;

    assert_eq!(status, StatusCode::OK);
    let main = &body[2]["items"];
    assert_eq!(assert::ids(main), vec![10, 11, 14]);
    assert_eq!(assert::ids(&main[1]["children"]), vec![12]);
    assert_eq!(assert::ids(&main[1]["children"][0]["children"]), vec![13]);
    assert_eq!(main[0]["children"], json!([]));
}

#[tokio::test]
async fn omitted_and_false_nested_are_identical() {
    let app = TestApp::new();

    for path in ["/menus", "/menus/2", "/locations/primary"] {
        let (_, omitted) = app.get_json(&format!("{PREFIX}{path}")).await;
        let (_, explicit) = app.get_json(&format!("{PREFIX}{path}?nested=false")).await;
        let (_, zero) = app.get_json(&format!("{PREFIX}{path}?nested=0")).await;

        assert_eq!(omitted, explicit, "{path}");
        assert_eq!(omitted, zero, "{path}");
    }
}

// =============================================================================
// Get menu by id
// =============================================================================

#[tokio::test]
async fn get_menu_by_id() {
    let app = TestApp::new();
    let (status, body) = app.get_json(&format!("{PREFIX}/menus/3")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 3);
    assert_eq!(body["name"], "Footer");
    assert_eq!(body["slug"], "footer");
    assert_eq!(assert::ids(&body["items"]), vec![20, 21]);
    assert!(body.get("locations").is_none());
}

#[tokio::test]
async fn get_menu_nested() {
    let app = TestApp::new();
    let (status, body) = app.get_json(&format!("{PREFIX}/menus/2?nested=1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(assert::ids(&body["items"]), vec![10, 11, 14]);
    assert_eq!(body["items"][1]["children"][0]["title"], "Team");
}

#[tokio::test]
async fn get_unknown_menu_is_not_found() {
    let app = TestApp::new();
    let (status, body) = app.get_json(&format!("{PREFIX}/menus/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert::error_code(&body, "not_found", 404);
    assert_eq!(body["message"], "Menu not found.");
}

#[tokio::test]
async fn out_of_range_menu_id_is_not_found() {
    let app = TestApp::new();
    let (status, body) = app
        .get_json(&format!("{PREFIX}/menus/18446744073709551616"))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert::error_code(&body, "not_found", 404);
}

#[tokio::test]
async fn non_numeric_menu_id_has_no_route() {
    let app = TestApp::new();
    let (status, body) = app.get_json(&format!("{PREFIX}/menus/main")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert::error_code(&body, "no_route", 404);
}

// =============================================================================
// Locations
// =============================================================================

#[tokio::test]
async fn list_locations_resolves_assignments() {
    let app = TestApp::new();
    let (status, body) = app.get_json(&format!("{PREFIX}/locations")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "location": "primary", "description": "Primary Menu", "menu_id": 2, "menu_name": "Main" },
            { "location": "footer", "description": "Footer Menu", "menu_id": 3, "menu_name": "Footer" },
            { "location": "social", "description": "Social Links", "menu_id": null, "menu_name": null },
            { "location": "sidebar", "description": "Sidebar", "menu_id": null, "menu_name": null }
        ])
    );
}

#[tokio::test]
async fn location_assigned_to_missing_menu_has_no_name() {
    let snapshot = test_snapshot()
        .with_location("primary", "Primary Menu")
        .assign("primary", 77);
    let app = TestApp::with_snapshot(snapshot, &Config::default());

    let (_, body) = app.get_json(&format!("{PREFIX}/locations")).await;
    assert_eq!(body[0]["menu_id"], 77);
    assert_eq!(body[0]["menu_name"], json!(null));

    let (status, body) = app.get_json(&format!("{PREFIX}/locations/primary")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert::error_code(&body, "not_assigned", 404);
}

#[tokio::test]
async fn get_menu_by_location() {
    let app = TestApp::new();
    let (status, body) = app.get_json(&format!("{PREFIX}/locations/primary")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "primary");
    assert_eq!(body["id"], 2);
    assert_eq!(body["name"], "Main");
    assert_eq!(body["slug"], "main");
    assert_eq!(assert::ids(&body["items"]), vec![10, 11, 12, 13, 14]);
}

#[tokio::test]
async fn get_menu_by_location_nested() {
    let app = TestApp::new();
    let (status, body) = app
        .get_json(&format!("{PREFIX}/locations/footer?nested=yes"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "footer");
    assert_eq!(assert::ids(&body["items"]), vec![20, 21]);
    assert_eq!(body["items"][0]["children"], json!([]));
}

#[tokio::test]
async fn assigned_but_unregistered_location_resolves() {
    let app = TestApp::new();
    let (status, body) = app.get_json(&format!("{PREFIX}/locations/mobile")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "mobile");
    assert_eq!(body["id"], 2);
}

#[tokio::test]
async fn registered_location_without_menu_is_not_assigned() {
    let app = TestApp::new();

    for key in ["sidebar", "social"] {
        let (status, body) = app.get_json(&format!("{PREFIX}/locations/{key}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{key}");
        assert::error_code(&body, "not_assigned", 404);
        assert_eq!(body["message"], "No menu assigned to this location.");
    }
}

#[tokio::test]
async fn unregistered_location_is_not_found() {
    let app = TestApp::new();
    let (status, body) = app.get_json(&format!("{PREFIX}/locations/header")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert::error_code(&body, "location_not_found", 404);
    assert_eq!(body["message"], "Menu location not found.");
}

#[tokio::test]
async fn malformed_location_key_has_no_route() {
    let app = TestApp::new();
    let (status, body) = app.get_json(&format!("{PREFIX}/locations/bad.key")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert::error_code(&body, "no_route", 404);
}

// =============================================================================
// Broken data and store failures
// =============================================================================

#[tokio::test]
async fn looping_items_fail_nested_but_serve_flat() {
    let snapshot = test_snapshot().with_menu(
        8,
        "Looping",
        vec![test_menu_item(1, 0), test_menu_item(1, 1)],
    );
    let app = TestApp::with_snapshot(snapshot, &Config::default());

    let (status, body) = app.get_json(&format!("{PREFIX}/menus/8")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(assert::ids(&body["items"]), vec![1, 1]);

    let (status, body) = app.get_json(&format!("{PREFIX}/menus/8?nested=true")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert::error_code(&body, "invalid_menu_tree", 500);
}

#[tokio::test]
async fn one_looping_menu_fails_the_nested_list() {
    let snapshot = test_snapshot()
        .with_menu(1, "Good", vec![test_menu_item(1, 0), test_menu_item(2, 1)])
        .with_menu(8, "Looping", vec![test_menu_item(5, 0), test_menu_item(5, 5)]);
    let app = TestApp::with_snapshot(snapshot, &Config::default());

    let (status, body) = app.get_json(&format!("{PREFIX}/menus")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(assert::ids(&body), vec![1, 8]);

    let (status, body) = app.get_json(&format!("{PREFIX}/menus?nested=1")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert::error_code(&body, "invalid_menu_tree", 500);
}

#[tokio::test]
async fn depth_limit_comes_from_config() {
    let snapshot = test_snapshot().with_menu(
        1,
        "Deep",
        vec![
            test_menu_item(1, 0),
            test_menu_item(2, 1),
            test_menu_item(3, 2),
        ],
    );
    let config = Config {
        max_menu_depth: 2,
        ..Config::default()
    };
    let app = TestApp::with_snapshot(snapshot, &config);

    let (status, body) = app.get_json(&format!("{PREFIX}/menus/1?nested=1")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert::error_code(&body, "invalid_menu_tree", 500);
}

#[tokio::test]
async fn store_failure_is_internal_error() {
    let app = TestApp::with_store(Arc::new(FailingStore), &Config::default());

    let (status, body) = app.get_json(&format!("{PREFIX}/menus")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert::error_code(&body, "internal_error", 500);
    assert!(!body["message"].as_str().unwrap().contains("backend"));

    let (status, body) = app.get_json("/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
}

// =============================================================================
// Routing, index, health, metrics
// =============================================================================

#[tokio::test]
async fn unknown_path_has_no_route() {
    let app = TestApp::new();
    let (status, body) = app.get_json(&format!("{PREFIX}/widgets")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert::error_code(&body, "no_route", 404);
}

#[tokio::test]
async fn namespace_index_lists_routes() {
    let app = TestApp::new();
    let (status, body) = app.get_json(PREFIX).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["namespace"], "wp-rest-menu/v1");

    let routes = body["routes"].as_object().unwrap();
    assert_eq!(routes.len(), 4);
    assert::has_key(&body["routes"], "/wp-rest-menu/v1/locations/(?P<location>[a-zA-Z0-9_-]+)");
    assert_eq!(
        body["routes"]["/wp-rest-menu/v1/menus"]["args"]["nested"]["default"],
        false
    );
}

#[tokio::test]
async fn custom_prefix_is_honoured() {
    let config = Config {
        api_root: String::new(),
        api_namespace: "menus/v2".to_string(),
        ..Config::default()
    };
    let app = TestApp::with_snapshot(rest_menus_test_utils::sample_site(), &config);

    let (status, body) = app.get_json("/menus/v2/menus/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);

    let (status, _) = app.get_json(&format!("{PREFIX}/menus/2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_check_reports_menu_count() {
    let app = TestApp::new();
    let (status, body) = app.get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["menus"], 3);
}

#[tokio::test]
async fn metrics_record_requests_and_misses() {
    let app = TestApp::new();
    app.get_json(&format!("{PREFIX}/menus/2")).await;
    app.get_json(&format!("{PREFIX}/menus/999")).await;
    app.get_json(&format!("{PREFIX}/locations/header")).await;
    app.get_json("/nowhere/at/all").await;

    let (status, text) = app.get_text("/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(text.contains(r#"path="/wp-json/wp-rest-menu/v1/menus/{id}""#));
    assert!(text.contains(r#"path="{unmatched}""#));
    assert!(text.contains(r#"menu_lookup_misses_total{code="not_found"} 1"#));
    assert!(text.contains(r#"menu_lookup_misses_total{code="location_not_found"} 1"#));
    assert!(!text.contains("nowhere"));
}

#[tokio::test]
async fn unsupported_method_has_no_route() {
    let app = TestApp::new();

    for (method, uri) in [
        ("POST", format!("{PREFIX}/menus")),
        ("DELETE", format!("{PREFIX}/menus/2")),
        ("PUT", format!("{PREFIX}/locations/primary")),
    ] {
        let response = app
            .request(Request::builder().method(method).uri(uri.as_str()).body(Body::empty()).unwrap())
            .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
        let body = common::response_json(response).await;
        assert::error_code(&body, "no_route", 404);
    }
}
