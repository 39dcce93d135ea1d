//! Request extractors shared by services.

use crate::error::AppError;
use axum::{
    Json, async_trait,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

/// JSON body that has been deserialized and passed `Validate`.
///
/// Rejects with a 422 before the handler runs, so handlers only ever see
/// payloads that satisfy their schema.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

/// Parses an untyped value into `T` and runs its validation rules.
///
/// The body must be a JSON object. Structural mismatches (wrong JSON types)
/// are reported as a single `UnprocessableBody`; constraint violations are
/// reported all at once.
pub fn validate_value<T>(value: Value) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    if !value.is_object() {
        return Err(AppError::UnprocessableBody(
            "Input should be a valid JSON object".to_string(),
        ));
    }

    let parsed: T =
        serde_json::from_value(value).map_err(|e| AppError::UnprocessableBody(e.to_string()))?;
    parsed.validate()?;
    Ok(parsed)
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                AppError::UnprocessableBody(rejection.body_text())
            })?;

        validate_value(value).map(ValidatedJson)
    }
}
