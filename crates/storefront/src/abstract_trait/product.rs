use crate::domain::{
    requests::product::{ProductForm, ProductQuery},
    response::product::Product,
};
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductServiceTrait {
    async fn find_all(&self, query: &ProductQuery) -> Result<Vec<Product>, ClientError>;
    async fn find_by_id(&self, id: i64) -> Result<Product, ClientError>;
    async fn search(&self, query: &str) -> Result<Vec<Product>, ClientError>;
    async fn create_product(&self, form: ProductForm) -> Result<Value, ClientError>;
    async fn update_product(&self, id: i64, form: ProductForm) -> Result<Value, ClientError>;
    async fn delete_product(&self, id: i64) -> Result<Value, ClientError>;
}
