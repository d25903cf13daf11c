use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "ProductName", default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    #[serde(rename = "Quantity", default, deserialize_with = "super::lenient::number_i64")]
    pub quantity: i64,

    #[serde(rename = "UnitPrice", default, deserialize_with = "super::lenient::number_f64")]
    pub unit_price: f64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "OrderId", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    #[serde(rename = "OrderDate", default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,

    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default)]
    pub items: Vec<OrderLine>,

    #[serde(rename = "TotalAmount", default, deserialize_with = "super::lenient::number_f64")]
    pub total_amount: f64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Order {
    /// Sum of the lines. `total_amount` from the backend stays the figure shown.
    pub fn computed_total(&self) -> f64 {
        self.items
            .iter()
            .map(|line| line.unit_price * line.quantity as f64)
            .sum()
    }
}
