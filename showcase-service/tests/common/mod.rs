#![allow(dead_code)]

use reqwest::Response;
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use showcase_service::config::{
    CorsConfig, DatabaseConfig, ShowcaseConfig, StoreBackend, StoreConfig, TelemetryConfig,
};
use showcase_service::services::{DocumentStore, MemoryStore};
use showcase_service::startup::Application;
use std::sync::Arc;

pub fn test_config() -> ShowcaseConfig {
    ShowcaseConfig {
        common: CoreConfig { port: 0 }, // Random port for testing
        database: DatabaseConfig {
            url: None,
            name: None,
        },
        store: StoreConfig {
            backend: StoreBackend::Memory,
        },
        cors: CorsConfig {
            allowed_origins: vec!["*".to_string()],
        },
        telemetry: TelemetryConfig {
            log_level: "debug".to_string(),
            otlp_endpoint: None,
        },
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Option<Arc<MemoryStore>>,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawns the service backed by a fresh in-memory store.
    pub async fn spawn() -> Self {
        Self::spawn_with(test_config(), Some(Arc::new(MemoryStore::new("showcase_test")))).await
    }

    /// Spawns the service with no store handle at all.
    pub async fn spawn_without_store() -> Self {
        Self::spawn_with(test_config(), None).await
    }

    pub async fn spawn_with(config: ShowcaseConfig, store: Option<Arc<MemoryStore>>) -> Self {
        let dyn_store = store.clone().map(|s| s as Arc<dyn DocumentStore>);

        let app = Application::build_with_store(config, dyn_store)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/api/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            store,
            client,
        }
    }

    pub fn store(&self) -> &MemoryStore {
        self.store.as_deref().expect("test app was spawned without a store")
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Field names named in a 422 `detail` list.
pub fn violated_fields(body: &Value) -> Vec<String> {
    body["detail"]
        .as_array()
        .expect("detail should be a list")
        .iter()
        .filter_map(|entry| entry["loc"].get(1).and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}
