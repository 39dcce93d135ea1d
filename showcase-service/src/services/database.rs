use super::store::{id_to_string, DocumentStore, StoreError};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime as BsonDateTime, Document},
    Client as MongoClient, Database,
};

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    /// Builds the client. The driver connects lazily, so an unreachable
    /// server only shows up on the first operation.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            StoreError::Unavailable(e.to_string())
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                StoreError::Unavailable(e.to_string())
            })?;
        Ok(())
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn create(&self, collection: &str, mut record: Document) -> Result<String, StoreError> {
        let now = BsonDateTime::now();
        record.insert("created_at", now);
        record.insert("updated_at", now);

        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(record, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to insert document: {}", e);
                StoreError::from(e)
            })?;

        id_to_string(&result.inserted_id).ok_or_else(|| {
            StoreError::OperationFailed(format!("Insert into {} returned no id", collection))
        })
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(doc! {}, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to query documents: {}", e);
                StoreError::from(e)
            })?;

        Ok(cursor.try_collect().await?)
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.db.list_collection_names(None).await?)
    }

    fn name(&self) -> &str {
        self.db.name()
    }
}
