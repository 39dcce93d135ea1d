use crate::config::DatabaseConfig;
use crate::dtos::diagnostics::{
    presence, DiagnosticReport, CONNECTED, DB_AVAILABLE, DB_NOT_INITIALIZED, DB_WORKING,
};
use crate::services::DocumentStore;
use crate::startup::AppState;
use axum::{extract::State, Json};

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

/// `/test`: always 200, whatever state the store is in.
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticReport> {
    Json(build_report(state.store.as_deref(), &state.config.database).await)
}

pub async fn build_report(
    store: Option<&dyn DocumentStore>,
    database: &DatabaseConfig,
) -> DiagnosticReport {
    let mut report = DiagnosticReport::default();

    match store {
        Some(store) => {
            tracing::debug!(database = %store.name(), "Running store diagnostics");
            report.database = DB_AVAILABLE.to_string();
            report.connection_status = CONNECTED.to_string();

            match store.collection_names().await {
                Ok(names) => {
                    report.collections = names.into_iter().take(MAX_COLLECTIONS).collect();
                    report.database = DB_WORKING.to_string();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Diagnostic collection listing failed");
                    report.database =
                        format!("⚠️  Connected but Error: {}", truncate(&e.to_string()));
                }
            }
        }
        None => {
            report.database = DB_NOT_INITIALIZED.to_string();
        }
    }

    // Reported as presence only, never the values themselves.
    report.database_url = Some(presence(database.url_is_set()));
    report.database_name = Some(presence(database.name_is_set()));

    report
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}
