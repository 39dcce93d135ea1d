//! Document store seam.
//!
//! Handlers only ever talk to a `DocumentStore`; MongoDB and the in-memory
//! store are interchangeable behind it.

use async_trait::async_trait;
use mongodb::bson::{self, Bson, Document};
use serde::Serialize;
use service_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No store handle exists, or the backend could not be reached.
    #[error("{0}")]
    Unavailable(String),

    #[error("{0}")]
    OperationFailed(String),

    /// A record could not be converted to or from its document form.
    #[error("{0}")]
    Malformed(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::OperationFailed(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::DatabaseError(anyhow::Error::new(err))
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts `record` and returns the store-assigned id in its textual form.
    async fn create(&self, collection: &str, record: Document) -> Result<String, StoreError>;

    /// Returns every record in `collection`, in whatever order the store yields.
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    async fn collection_names(&self) -> Result<Vec<String>, StoreError>;

    /// Name of the underlying database.
    fn name(&self) -> &str;
}

/// Serializes `record` and inserts it.
pub async fn create_record<T>(
    store: &dyn DocumentStore,
    collection: &str,
    record: &T,
) -> Result<String, StoreError>
where
    T: Serialize + ?Sized,
{
    let document = bson::to_document(record).map_err(|e| {
        StoreError::Malformed(format!("Failed to encode {} record: {}", collection, e))
    })?;
    store.create(collection, document).await
}

/// Textual form of a native id. ObjectIds become their hex string.
pub fn id_to_string(id: &Bson) -> Option<String> {
    match id {
        Bson::Null | Bson::Undefined => None,
        Bson::ObjectId(oid) => Some(oid.to_hex()),
        Bson::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
