use crate::config::{ShowcaseConfig, StoreBackend};
use crate::handlers;
use crate::services::{DocumentStore, MemoryStore, MongoStore, StoreError};
use axum::{
    http::HeaderValue,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    security_headers::security_headers_middleware,
    tracing::{http_span, request_id_middleware},
};
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Clone)]
pub struct AppState {
    pub config: ShowcaseConfig,
    /// `None` when no store is configured or it could not be set up.
    pub store: Option<Arc<dyn DocumentStore>>,
}

impl AppState {
    pub fn store(&self) -> Result<&Arc<dyn DocumentStore>, StoreError> {
        self.store.as_ref().ok_or_else(|| {
            StoreError::Unavailable(
                "Database not available. Check DATABASE_URL and DATABASE_NAME environment variables"
                    .to_string(),
            )
        })
    }
}

/// Builds the configured store. Failures are logged and leave the service
/// running without a store; requests that need one answer with a 500.
pub async fn connect_store(config: &ShowcaseConfig) -> Option<Arc<dyn DocumentStore>> {
    match config.store.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory document store");
            let name = config.database.name.as_deref().unwrap_or("showcase");
            Some(Arc::new(MemoryStore::new(name)))
        }
        StoreBackend::Mongodb => {
            let (Some(uri), Some(name)) = (&config.database.url, &config.database.name) else {
                tracing::warn!("DATABASE_URL or DATABASE_NAME not set, running without a store");
                return None;
            };
            match MongoStore::connect(uri, name).await {
                Ok(store) => Some(Arc::new(store)),
                Err(e) => {
                    tracing::error!(error = %e, "MongoDB client setup failed, running without a store");
                    None
                }
            }
        }
    }
}

fn cors_layer(config: &ShowcaseConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Invalid CORS origin '{}': {}. Skipping.", o, e);
                None
            }
        })
        .collect::<Vec<_>>();

    layer.allow_origin(origins)
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health_check))
        .route("/api/products", get(handlers::list_products))
        .route("/api/inquiries", post(handlers::create_inquiry))
        .route("/test", get(handlers::test_database))
        .route("/metrics", get(handlers::metrics_endpoint))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(http_span))
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors)
        .with_state(state)
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

type ServerFuture = Pin<Box<dyn Future<Output = std::io::Result<()>> + Send>>;

pub struct Application {
    port: u16,
    server: ServerFuture,
}

impl Application {
    pub async fn build(config: ShowcaseConfig) -> Result<Self, AppError> {
        let store = connect_store(&config).await;
        Self::build_with_store(config, store).await
    }

    /// Builds the application around an already constructed store.
    pub async fn build_with_store(
        config: ShowcaseConfig,
        store: Option<Arc<dyn DocumentStore>>,
    ) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let app = build_router(AppState { config, store });

        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .into_future();

        Ok(Self {
            port,
            server: Box::pin(server),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
