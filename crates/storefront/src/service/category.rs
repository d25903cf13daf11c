use super::{require_farmer, validate};
use crate::{
    abstract_trait::{category::CategoryServiceTrait, session::DynSessionStore},
    client::{ApiClient, ApiRequest},
    domain::{
        requests::category::CreateCategoryRequest,
        response::{category::Category, envelope::extract_list},
    },
};
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::ClientError;
use tracing::info;

#[derive(Debug, Clone)]
pub struct CategoryService {
    client: ApiClient,
    session: DynSessionStore,
}

impl CategoryService {
    pub fn new(client: ApiClient, session: DynSessionStore) -> Self {
        Self { client, session }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn get_categories(&self) -> Result<Vec<Category>, ClientError> {
        let value = self.client.call(ApiRequest::get("/categories")).await?;
        extract_list(value, "categories")
    }

    async fn create_category(&self, name: &str) -> Result<Value, ClientError> {
        require_farmer(&self.session, "add categories").await?;

        let body = CreateCategoryRequest {
            name: name.trim().to_string(),
        };
        validate(&body)?;

        info!("Creating category {}", body.name);
        self.client
            .call(ApiRequest::post("/categories").json(&body)?)
            .await
    }
}
