use crate::domain::{
    requests::auth::RegisterRequest,
    response::user::LoginResponse,
};
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError>;
    async fn register(&self, input: &RegisterRequest) -> Result<Value, ClientError>;
    async fn logout(&self) -> Result<(), ClientError>;
}
