use crate::domain::response::review::Review;
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynReviewService = Arc<dyn ReviewServiceTrait + Send + Sync>;

#[async_trait]
pub trait ReviewServiceTrait {
    async fn get_reviews(&self, product_id: i64) -> Result<Vec<Review>, ClientError>;
    async fn create_review(
        &self,
        product_id: i64,
        rating: i64,
        comment: &str,
    ) -> Result<Value, ClientError>;
}
