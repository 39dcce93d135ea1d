mod common;

use common::test_config;
use reqwest::StatusCode;
use serde_json::{json, Value};
use showcase_service::config::StoreBackend;
use showcase_service::services::{DocumentStore, MongoStore};
use showcase_service::startup::Application;
use std::sync::Arc;
use uuid::Uuid;

/// Full round trip against a real MongoDB.
#[tokio::test]
#[ignore = "Requires MongoDB at TEST_MONGODB_URI (default mongodb://localhost:27017)"]
async fn products_and_inquiries_round_trip_through_mongodb() {
    let uri = std::env::var("TEST_MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let db_name = format!("showcase_test_{}", Uuid::new_v4().simple());

    let mut config = test_config();
    config.store.backend = StoreBackend::Mongodb;
    config.database.url = Some(uri.clone());
    config.database.name = Some(db_name.clone());

    let mongo = MongoStore::connect(&uri, &db_name)
        .await
        .expect("Failed to connect to MongoDB");
    mongo.health_check().await.expect("MongoDB is not reachable");

    let app = Application::build_with_store(config, Some(Arc::new(mongo.clone())))
        .await
        .expect("Failed to build application");
    let address = format!("http://127.0.0.1:{}", app.port());
    tokio::spawn(app.run_until_stopped());

    let client = reqwest::Client::new();

    let products: Vec<Value> = client
        .get(format!("{}/api/products", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(products.len(), 3);
    assert!(products.iter().all(|p| p["id"].is_string()));

    let response = client
        .post(format!("{}/api/inquiries", address))
        .json(&json!({ "name": "Ada", "email": "ada@example.com", "message": "hi" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let stored = mongo.list("inquiry").await.unwrap();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].contains_key("created_at"));

    let report: Value = client
        .get(format!("{}/test", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(report["database"], "✅ Connected & Working");
    assert_eq!(report["database_url"], "✅ Set");

    let _ = mongo.database().drop(None).await;
}
