use crate::{
    abstract_trait::review::ReviewServiceTrait,
    client::{ApiClient, ApiRequest},
    domain::{
        requests::review::CreateReviewRequest,
        response::{envelope::extract_list, review::Review},
    },
};
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::ClientError;

#[derive(Debug, Clone)]
pub struct ReviewService {
    client: ApiClient,
}

impl ReviewService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReviewServiceTrait for ReviewService {
    async fn get_reviews(&self, product_id: i64) -> Result<Vec<Review>, ClientError> {
        let value = self
            .client
            .call(ApiRequest::get(format!("/reviews/{product_id}")))
            .await?;
        extract_list(value, "reviews")
    }

    async fn create_review(
        &self,
        product_id: i64,
        rating: i64,
        comment: &str,
    ) -> Result<Value, ClientError> {
        let body = CreateReviewRequest {
            product_id,
            rating,
            comment: comment.to_string(),
        };

        self.client
            .call(ApiRequest::post(format!("/reviews/{product_id}")).json(&body)?)
            .await
    }
}
