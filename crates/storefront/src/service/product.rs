use super::{require_farmer, validate};
use crate::{
    abstract_trait::{product::ProductServiceTrait, session::DynSessionStore},
    client::{ApiClient, ApiRequest},
    domain::{
        requests::product::{ProductForm, ProductQuery},
        response::{
            envelope::{extract_list, extract_record},
            product::Product,
        },
    },
};
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::ClientError;
use tracing::info;

#[derive(Debug, Clone)]
pub struct ProductService {
    client: ApiClient,
    session: DynSessionStore,
}

impl ProductService {
    pub fn new(client: ApiClient, session: DynSessionStore) -> Self {
        Self { client, session }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(&self, query: &ProductQuery) -> Result<Vec<Product>, ClientError> {
        let value = self
            .client
            .call(ApiRequest::get("/products").query_pairs(&query.params))
            .await?;
        let products: Vec<Product> = extract_list(value, "products")?;

        info!("Fetched {} products", products.len());
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Product, ClientError> {
        let value = self
            .client
            .call(ApiRequest::get(format!("/products/{id}")))
            .await?;
        extract_record(value, "product")
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, ClientError> {
        let query = query.trim();
        if query.is_empty() {
            return self.find_all(&ProductQuery::new()).await;
        }

        let value = self
            .client
            .call(ApiRequest::get("/products/search").query("q", query))
            .await?;
        let products: Vec<Product> = extract_list(value, "products")?;

        info!("Search '{query}' matched {} products", products.len());
        Ok(products)
    }

    async fn create_product(&self, form: ProductForm) -> Result<Value, ClientError> {
        require_farmer(&self.session, "add products").await?;
        validate(&form)?;

        info!("Creating product {}", form.name);
        self.client
            .call(ApiRequest::post("/products").multipart(form.into_multipart()?))
            .await
    }

    async fn update_product(&self, id: i64, form: ProductForm) -> Result<Value, ClientError> {
        require_farmer(&self.session, "edit products").await?;
        validate(&form)?;

        info!("Updating product {id}");
        self.client
            .call(ApiRequest::put(format!("/products/{id}")).multipart(form.into_multipart()?))
            .await
    }

    async fn delete_product(&self, id: i64) -> Result<Value, ClientError> {
        require_farmer(&self.session, "delete products").await?;

        info!("Deleting product {id}");
        self.client
            .call(ApiRequest::delete(format!("/products/{id}")))
            .await
    }
}
