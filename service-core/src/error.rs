use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Body could not be read as the expected JSON shape.
    #[error("Unprocessable body: {0}")]
    UnprocessableBody(String),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Database error: {0}")]
    DatabaseError(anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

/// One entry of a 422 body, shaped like `{"loc": ["body", field], "msg", "type"}`.
#[derive(Debug, Serialize)]
pub struct FieldViolation {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Flattens every field error into a list sorted by field name.
pub fn field_violations(errors: &validator::ValidationErrors) -> Vec<FieldViolation> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.to_string().cmp(&b.0.to_string()));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| FieldViolation {
                loc: vec!["body".to_string(), field.clone()],
                msg: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid {}", field)),
                kind: err.code.to_string(),
            })
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::ValidationError(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!(field_violations(&errors)),
            ),
            AppError::UnprocessableBody(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!([{ "loc": ["body"], "msg": msg, "type": "json_invalid" }]),
            ),
            AppError::InternalError(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Value::from(err.to_string()),
                )
            }
            // Store failures carry the adapter's own message, unredacted.
            AppError::DatabaseError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Value::from(err.to_string()),
            ),
            AppError::ConfigError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Value::from(format!("Configuration error: {}", err)),
            ),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
