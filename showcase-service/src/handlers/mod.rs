pub mod diagnostics;
pub mod health;
pub mod inquiries;
pub mod products;

pub use diagnostics::test_database;
pub use health::{health_check, metrics_endpoint, root};
pub use inquiries::create_inquiry;
pub use products::list_products;
