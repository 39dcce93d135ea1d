pub mod database;
pub mod memory;
pub mod metrics;
pub mod seed;
pub mod store;

pub use database::MongoStore;
pub use memory::MemoryStore;
pub use metrics::{get_metrics, init_metrics};
pub use seed::{demo_products, seed_demo_products, SeedOutcome};
pub use store::{create_record, id_to_string, DocumentStore, StoreError};
