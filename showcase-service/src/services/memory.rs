use super::store::{id_to_string, DocumentStore, StoreError};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, DateTime as BsonDateTime, Document};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Process-local store for development runs and tests.
///
/// Failures can be switched on per operation to exercise error paths.
pub struct MemoryStore {
    name: String,
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    collections: BTreeMap<String, Vec<Document>>,
    fail_list: bool,
    /// Lists still allowed to succeed before every further list fails.
    lists_before_failure: Option<usize>,
    fail_create: bool,
    fail_collection_names: bool,
    /// Creates whose `field` equals the given value are rejected.
    rejected: Vec<(String, Bson)>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: RwLock::new(Inner::default()),
        }
    }

    pub async fn set_fail_list(&self, fail: bool) {
        self.inner.write().await.fail_list = fail;
    }

    /// Lets the next `calls` lists succeed, then fails every list after them.
    pub async fn fail_list_after(&self, calls: usize) {
        self.inner.write().await.lists_before_failure = Some(calls);
    }

    pub async fn set_fail_create(&self, fail: bool) {
        self.inner.write().await.fail_create = fail;
    }

    pub async fn set_fail_collection_names(&self, fail: bool) {
        self.inner.write().await.fail_collection_names = fail;
    }

    pub async fn reject_create_where(&self, field: &str, value: impl Into<Bson>) {
        self.inner
            .write()
            .await
            .rejected
            .push((field.to_string(), value.into()));
    }

    pub async fn count(&self, collection: &str) -> usize {
        self.inner
            .read()
            .await
            .collections
            .get(collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create(&self, collection: &str, mut record: Document) -> Result<String, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.fail_create {
            return Err(StoreError::OperationFailed(format!(
                "write to {} refused",
                collection
            )));
        }
        if inner
            .rejected
            .iter()
            .any(|(field, value)| record.get(field) == Some(value))
        {
            return Err(StoreError::OperationFailed(format!(
                "write to {} rejected",
                collection
            )));
        }

        if !record.contains_key("_id") {
            record.insert("_id", ObjectId::new());
        }
        let now = BsonDateTime::now();
        record.insert("created_at", now);
        record.insert("updated_at", now);

        let id = record.get("_id").and_then(id_to_string).ok_or_else(|| {
            StoreError::OperationFailed(format!("Insert into {} produced no id", collection))
        })?;

        inner
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(record);

        Ok(id)
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let mut inner = self.inner.write().await;
        let exhausted = match inner.lists_before_failure.as_mut() {
            Some(0) => true,
            Some(remaining) => {
                *remaining -= 1;
                false
            }
            None => false,
        };
        if inner.fail_list || exhausted {
            return Err(StoreError::Unavailable(
                "connection refused: memory store offline".to_string(),
            ));
        }
        Ok(inner
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let inner = self.inner.read().await;
        if inner.fail_collection_names {
            return Err(StoreError::Unavailable(
                "listCollections failed: memory store offline".to_string(),
            ));
        }
        Ok(inner.collections.keys().cloned().collect())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
