pub mod diagnostics;
pub mod inquiries;
pub mod products;

pub use diagnostics::DiagnosticReport;
pub use inquiries::InquiryCreatedResponse;
pub use products::ProductAppResponse;
