use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct InquiryCreatedResponse {
    pub status: String,
    pub id: String,
}

impl InquiryCreatedResponse {
    pub fn ok(id: String) -> Self {
        Self {
            status: "ok".to_string(),
            id,
        }
    }
}
