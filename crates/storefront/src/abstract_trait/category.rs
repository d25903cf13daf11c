use crate::domain::response::category::Category;
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynCategoryService = Arc<dyn CategoryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryServiceTrait {
    async fn get_categories(&self) -> Result<Vec<Category>, ClientError>;
    async fn create_category(&self, name: &str) -> Result<Value, ClientError>;
}
