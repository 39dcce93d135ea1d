use crate::services::{id_to_string, StoreError};
use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};

/// A product app as clients see it: `id` is always text.
///
/// When deserialized, the id may be given either as `id` or under the
/// store's native `_id` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAppResponse {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub link: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub pricing: Option<String>,
}

/// Stored shape; tolerant of a missing or null `tags` field.
#[derive(Deserialize)]
struct StoredProductApp {
    name: String,
    tagline: String,
    description: String,
    link: Option<String>,
    image: Option<String>,
    tags: Option<Vec<String>>,
    pricing: Option<String>,
}

impl ProductAppResponse {
    /// Maps a raw store record to its public shape, turning the native
    /// `_id` into the text `id`.
    pub fn from_document(document: Document) -> Result<Self, StoreError> {
        let id = document.get("_id").and_then(id_to_string);
        let stored: StoredProductApp = bson::from_document(document).map_err(|e| {
            StoreError::Malformed(format!(
                "Stored product {} is invalid: {}",
                id.as_deref().unwrap_or("<no id>"),
                e
            ))
        })?;

        Ok(Self {
            id,
            name: stored.name,
            tagline: stored.tagline,
            description: stored.description,
            link: stored.link,
            image: stored.image,
            tags: stored.tags.unwrap_or_default(),
            pricing: stored.pricing,
        })
    }
}
