use super::validate;
use crate::{
    abstract_trait::order::OrderServiceTrait,
    client::{ApiClient, ApiRequest},
    domain::{
        requests::order::{CreateOrderRequest, OrderItemRequest},
        response::{cart::CartItem, envelope::extract_list, order::Order},
    },
};
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::ClientError;
use tracing::info;

#[derive(Debug, Clone)]
pub struct OrderService {
    client: ApiClient,
}

impl OrderService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn create_order(&self, items: &[OrderItemRequest]) -> Result<Value, ClientError> {
        let body = CreateOrderRequest {
            items: items.to_vec(),
        };
        validate(&body)?;

        info!("Placing order with {} lines", body.items.len());
        self.client
            .call(ApiRequest::post("/orders").json(&body)?)
            .await
    }

    async fn checkout(&self, cart: &[CartItem]) -> Result<Value, ClientError> {
        let body = CreateOrderRequest::from_cart(cart)?;
        self.create_order(&body.items).await
    }

    async fn get_orders(&self) -> Result<Vec<Order>, ClientError> {
        let value = self.client.call(ApiRequest::get("/orders")).await?;
        let orders: Vec<Order> = extract_list(value, "orders")?;

        info!("Fetched {} orders", orders.len());
        Ok(orders)
    }
}
