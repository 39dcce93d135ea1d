//! Demo catalog written when the product collection is found empty.

use super::store::{create_record, DocumentStore, StoreError};
use crate::models::{ProductApp, ProductAppInput, PRODUCT_COLLECTION};
use metrics::counter;
use validator::ValidationErrors;

/// Result of writing one demo record.
#[derive(Debug)]
pub struct SeedOutcome {
    pub name: String,
    pub result: Result<String, StoreError>,
}

fn demo_inputs() -> [ProductAppInput; 3] {
    [
        ProductAppInput {
            name: Some("Nimbus Desk".into()),
            tagline: Some("Task management that feels weightless".into()),
            description: Some(
                "A beautifully minimal task manager with real-time collaboration and calendar sync."
                    .into(),
            ),
            link: Some("https://example.com/nimbus".into()),
            image: Some(
                "https://images.unsplash.com/photo-1555099962-4199c345e5dd?q=80&w=1200&auto=format&fit=crop"
                    .into(),
            ),
            tags: Some(vec![
                "SaaS".into(),
                "Productivity".into(),
                "Collaboration".into(),
            ]),
            pricing: Some("Freemium".into()),
        },
        ProductAppInput {
            name: Some("Pulse Analytics".into()),
            tagline: Some("Product analytics for lean teams".into()),
            description: Some(
                "Event tracking, funnels, and retention without the bloat. Privacy-first by default."
                    .into(),
            ),
            link: Some("https://example.com/pulse".into()),
            image: Some(
                "https://images.unsplash.com/photo-1556157382-97eda2d62296?q=80&w=1200&auto=format&fit=crop"
                    .into(),
            ),
            tags: Some(vec!["Analytics".into(), "Privacy".into(), "SaaS".into()]),
            pricing: Some("Starts at $19/mo".into()),
        },
        ProductAppInput {
            name: Some("Relay Support".into()),
            tagline: Some("Shared inbox that actually scales".into()),
            description: Some(
                "Manage email, chat, and social in one place. Powered by AI-assisted responses."
                    .into(),
            ),
            link: Some("https://example.com/relay".into()),
            image: Some(
                "https://images.unsplash.com/photo-1558655146-d09347e92766?q=80&w=1200&auto=format&fit=crop"
                    .into(),
            ),
            tags: Some(vec!["Support".into(), "AI".into(), "Inbox".into()]),
            pricing: Some("$29/agent/mo".into()),
        },
    ]
}

/// The three demo products, validated like any other input.
pub fn demo_products() -> Result<Vec<ProductApp>, ValidationErrors> {
    demo_inputs().into_iter().map(ProductApp::try_from).collect()
}

/// Writes each demo product independently. A failed write is logged and
/// recorded in its outcome; it never stops the remaining writes.
pub async fn seed_demo_products(store: &dyn DocumentStore) -> Vec<SeedOutcome> {
    let products = match demo_products() {
        Ok(products) => products,
        Err(e) => {
            tracing::error!(error = %e, "Demo products failed validation, skipping seed");
            return Vec::new();
        }
    };

    let mut outcomes = Vec::with_capacity(products.len());
    for product in products {
        let result = create_record(store, PRODUCT_COLLECTION, &product).await;
        match &result {
            Ok(id) => {
                counter!("showcase_seed_writes_total", "outcome" => "ok").increment(1);
                tracing::info!(product = %product.name, id = %id, "Seeded demo product");
            }
            Err(e) => {
                counter!("showcase_seed_writes_total", "outcome" => "failed").increment(1);
                tracing::warn!(product = %product.name, error = %e, "Failed to seed demo product");
            }
        }
        outcomes.push(SeedOutcome {
            name: product.name,
            result,
        });
    }

    outcomes
}
