mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use common::{test_config, TestApp};
use serde_json::Value;
use showcase_service::services::{DocumentStore, MemoryStore};
use showcase_service::{build_router, AppState};
use std::sync::Arc;
use tower::util::ServiceExt;

#[tokio::test]
async fn root_reports_liveness() {
    let app = TestApp::spawn().await;

    let response = app.get("/").await;
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Showcase backend running");
}

#[tokio::test]
async fn health_check_works_without_store() {
    let app = TestApp::spawn_without_store().await;

    let response = app.get("/api/health").await;
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn request_id_is_echoed() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/api/health", app.address))
        .header("x-request-id", "req-123")
        .send()
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "req-123"
    );
}

#[tokio::test]
async fn diagnostics_report_working_store() {
    let app = TestApp::spawn().await;
    app.get("/api/products").await; // creates the productapp collection

    let response = app.get("/test").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["database_url"], "❌ Not Set");
    assert_eq!(body["database_name"], "❌ Not Set");
    assert_eq!(body["collections"], serde_json::json!(["productapp"]));
}

#[tokio::test]
async fn diagnostics_never_fail_without_store() {
    let app = TestApp::spawn_without_store().await;

    let response = app.get("/test").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["database"], "⚠️  Available but not initialized");
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["collections"], serde_json::json!([]));
}

#[tokio::test]
async fn diagnostics_degrade_on_unreachable_store() {
    let app = TestApp::spawn().await;
    app.store().set_fail_collection_names(true).await;

    let response = app.get("/test").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    let database = body["database"].as_str().unwrap();
    assert!(database.starts_with("⚠️  Connected but Error: "));
    assert!(database.chars().count() <= "⚠️  Connected but Error: ".chars().count() + 50);
}

/// Router-level check that needs no listener.
#[tokio::test]
async fn router_serves_products_in_process() {
    let store = Arc::new(MemoryStore::new("oneshot"));
    let state = AppState {
        config: test_config(),
        store: Some(store.clone() as Arc<dyn DocumentStore>),
    };

    let response = build_router(state)
        .oneshot(
            Request::builder()
                .uri("/api/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let products: Vec<Value> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(store.list("productapp").await.unwrap().len(), 3);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let state = AppState {
        config: test_config(),
        store: None,
    };

    let response = build_router(state)
        .oneshot(
            Request::builder()
                .uri("/api/missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
