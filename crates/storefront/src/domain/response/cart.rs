use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "CartItemId", default, skip_serializing_if = "Option::is_none")]
    pub cart_item_id: Option<i64>,

    #[serde(rename = "ProductId", default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,

    #[serde(rename = "ProductName", default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    #[serde(rename = "Price", default, deserialize_with = "super::lenient::number_f64")]
    pub price: f64,

    #[serde(rename = "Quantity", default, deserialize_with = "super::lenient::number_i64")]
    pub quantity: i64,

    #[serde(rename = "ImageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, quantity: i64) -> CartItem {
        CartItem {
            price,
            quantity,
            ..Default::default()
        }
    }

    #[test]
    fn total_is_sum_of_price_times_quantity() {
        let items = vec![item(12.5, 2), item(3.0, 3), item(100.0, 0)];
        assert!((cart_total(&items) - 34.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(cart_total(&[]), 0.0);
    }
}
