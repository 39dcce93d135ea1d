use crate::dtos::ProductAppResponse;
use crate::models::PRODUCT_COLLECTION;
use crate::services::seed_demo_products;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// Lists every product app, seeding the demo catalog first when the
/// collection is empty.
///
/// Two first requests racing on an empty store may both seed; the
/// duplicates are accepted.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductAppResponse>>, AppError> {
    let store = state.store()?;

    let mut records = store.list(PRODUCT_COLLECTION).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list products");
        e
    })?;

    if records.is_empty() {
        tracing::info!("Product catalog is empty, seeding demo products");

        let outcomes = seed_demo_products(store.as_ref()).await;
        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        if failed > 0 {
            tracing::warn!(failed, total = outcomes.len(), "Demo seed partially failed");
        }

        records = store.list(PRODUCT_COLLECTION).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to list products after seeding");
            e
        })?;
    }

    let products = records
        .into_iter()
        .map(ProductAppResponse::from_document)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            tracing::error!(error = %e, "Stored product could not be shaped");
            AppError::from(e)
        })?;

    Ok(Json(products))
}
