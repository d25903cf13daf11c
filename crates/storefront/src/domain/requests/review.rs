use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    #[serde(rename = "ProductID")]
    pub product_id: i64,

    #[serde(rename = "Rating")]
    pub rating: i64,

    #[serde(rename = "Comment")]
    pub comment: String,
}
