use crate::domain::response::cart::CartItem;
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartServiceTrait {
    async fn add_to_cart(&self, product_id: i64, quantity: i64) -> Result<Value, ClientError>;
    async fn get_cart(&self) -> Result<Vec<CartItem>, ClientError>;
    async fn remove_from_cart(&self, cart_item_id: i64) -> Result<Value, ClientError>;
}
