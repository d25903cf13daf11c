use crate::domain::response::cart::CartItem;
use serde::{Deserialize, Serialize};
use shared::errors::ClientError;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemRequest {
    #[serde(rename = "ProductId")]
    pub product_id: i64,

    #[serde(rename = "Quantity")]
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Cart is empty"))]
    #[serde(rename = "Items")]
    pub items: Vec<OrderItemRequest>,
}

impl CreateOrderRequest {
    /// One order line per cart item. Items without a product id cannot be
    /// ordered and fail the whole checkout.
    pub fn from_cart(cart: &[CartItem]) -> Result<Self, ClientError> {
        let items = cart
            .iter()
            .map(|item| match item.product_id {
                Some(product_id) => Ok(OrderItemRequest {
                    product_id,
                    quantity: item.quantity,
                }),
                None => Err(ClientError::Validation(vec![format!(
                    "Cart item {} has no ProductId",
                    item.cart_item_id
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| "?".to_string())
                )])),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_items_from_cart() {
        let cart = vec![
            CartItem {
                cart_item_id: Some(1),
                product_id: Some(10),
                quantity: 2,
                ..Default::default()
            },
            CartItem {
                cart_item_id: Some(2),
                product_id: Some(11),
                quantity: 1,
                ..Default::default()
            },
        ];

        let request = CreateOrderRequest::from_cart(&cart).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"Items": [
                {"ProductId": 10, "Quantity": 2},
                {"ProductId": 11, "Quantity": 1}
            ]})
        );
    }

    #[test]
    fn item_without_product_is_rejected() {
        let cart = vec![CartItem {
            cart_item_id: Some(5),
            quantity: 1,
            ..Default::default()
        }];

        let err = CreateOrderRequest::from_cart(&cart).unwrap_err();
        assert_eq!(err.message(), "Cart item 5 has no ProductId");
    }

    #[test]
    fn empty_order_fails_validation() {
        let request = CreateOrderRequest { items: vec![] };
        assert!(request.validate().is_err());
    }
}
