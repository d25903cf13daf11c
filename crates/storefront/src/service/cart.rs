use super::require_login;
use crate::{
    abstract_trait::{cart::CartServiceTrait, session::DynSessionStore},
    client::{ApiClient, ApiRequest},
    domain::{
        requests::cart::AddToCartRequest,
        response::{cart::CartItem, envelope::extract_list},
    },
};
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::ClientError;
use tracing::info;

#[derive(Debug, Clone)]
pub struct CartService {
    client: ApiClient,
    session: DynSessionStore,
}

impl CartService {
    pub fn new(client: ApiClient, session: DynSessionStore) -> Self {
        Self { client, session }
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn add_to_cart(&self, product_id: i64, quantity: i64) -> Result<Value, ClientError> {
        require_login(&self.session).await?;

        let body = AddToCartRequest {
            product_id,
            quantity,
        };

        info!("Adding {quantity} x product {product_id} to cart");
        self.client
            .call(ApiRequest::post("/cart").json(&body)?)
            .await
    }

    async fn get_cart(&self) -> Result<Vec<CartItem>, ClientError> {
        let value = self.client.call(ApiRequest::get("/cart")).await?;
        extract_list(value, "items")
    }

    async fn remove_from_cart(&self, cart_item_id: i64) -> Result<Value, ClientError> {
        info!("Removing cart item {cart_item_id}");
        self.client
            .call(ApiRequest::delete(format!("/cart/{cart_item_id}")))
            .await
    }
}
