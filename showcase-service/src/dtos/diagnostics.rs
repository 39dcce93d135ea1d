use serde::{Deserialize, Serialize};

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const DB_NOT_AVAILABLE: &str = "❌ Not Available";
pub const DB_AVAILABLE: &str = "✅ Available";
pub const DB_WORKING: &str = "✅ Connected & Working";
pub const DB_NOT_INITIALIZED: &str = "⚠️  Available but not initialized";
pub const VALUE_SET: &str = "✅ Set";
pub const VALUE_NOT_SET: &str = "❌ Not Set";
pub const CONNECTED: &str = "Connected";
pub const NOT_CONNECTED: &str = "Not Connected";

/// Best-effort report served by `/test`. Each field degrades on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for DiagnosticReport {
    fn default() -> Self {
        Self {
            backend: BACKEND_RUNNING.to_string(),
            database: DB_NOT_AVAILABLE.to_string(),
            database_url: None,
            database_name: None,
            connection_status: NOT_CONNECTED.to_string(),
            collections: Vec::new(),
        }
    }
}

pub fn presence(is_set: bool) -> String {
    if is_set { VALUE_SET } else { VALUE_NOT_SET }.to_string()
}
