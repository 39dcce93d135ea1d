use crate::dtos::InquiryCreatedResponse;
use crate::models::{Inquiry, InquiryInput, INQUIRY_COLLECTION};
use crate::services::create_record;
use crate::startup::AppState;
use axum::{extract::State, Json};
use metrics::counter;
use service_core::error::AppError;
use service_core::extract::ValidatedJson;

/// Stores a contact inquiry. Invalid payloads are turned away by the
/// extractor and never reach the store. Not idempotent: a retried
/// submission is a second record.
pub async fn create_inquiry(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<InquiryInput>,
) -> Result<Json<InquiryCreatedResponse>, AppError> {
    let inquiry = Inquiry::try_from(input)?;
    let store = state.store()?;

    let id = create_record(store.as_ref(), INQUIRY_COLLECTION, &inquiry)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to store inquiry");
            e
        })?;

    counter!("showcase_inquiries_created_total").increment(1);
    tracing::info!(id = %id, "Inquiry received");

    Ok(Json(InquiryCreatedResponse::ok(id)))
}
