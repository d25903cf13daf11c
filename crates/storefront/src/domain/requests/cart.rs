use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToCartRequest {
    #[serde(rename = "ProductID")]
    pub product_id: i64,

    #[serde(rename = "Quantity")]
    pub quantity: i64,
}
