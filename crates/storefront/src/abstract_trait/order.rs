use crate::domain::{
    requests::order::OrderItemRequest,
    response::{cart::CartItem, order::Order},
};
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderServiceTrait {
    async fn create_order(&self, items: &[OrderItemRequest]) -> Result<Value, ClientError>;
    async fn checkout(&self, cart: &[CartItem]) -> Result<Value, ClientError>;
    async fn get_orders(&self) -> Result<Vec<Order>, ClientError>;
}
