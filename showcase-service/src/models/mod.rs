pub mod inquiry;
pub mod product_app;

pub use inquiry::{Inquiry, InquiryInput, INQUIRY_COLLECTION};
pub use product_app::{ProductApp, ProductAppInput, PRODUCT_COLLECTION};
