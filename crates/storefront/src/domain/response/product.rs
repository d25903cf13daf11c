use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Catalogue entry.
///
/// The backend has been seen sending both `ProductId` and `id`, and both
/// `Stock` and `StockQuantity`. Each spelling is its own field; the accessors
/// pick whichever is present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "ProductId", default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,

    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(rename = "ProductName", default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "Price", default, deserialize_with = "super::lenient::number_f64")]
    pub price: f64,

    #[serde(rename = "Stock", default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,

    #[serde(rename = "StockQuantity", default, skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,

    #[serde(rename = "CategoryId", default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,

    #[serde(rename = "ImageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    pub fn key(&self) -> Option<i64> {
        self.product_id.or(self.id)
    }

    pub fn display_name(&self) -> &str {
        self.product_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("")
    }

    pub fn available_stock(&self) -> Option<i64> {
        self.stock.or(self.stock_quantity)
    }

    /// Unknown stock counts as available.
    pub fn in_stock(&self) -> bool {
        self.available_stock().is_none_or(|stock| stock > 0)
    }
}
