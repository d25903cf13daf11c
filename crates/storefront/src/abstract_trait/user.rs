use crate::domain::response::user::UserRecord;
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserServiceTrait {
    async fn find_all(&self) -> Result<Vec<UserRecord>, ClientError>;
    async fn find_by_id(&self, id: i64) -> Result<UserRecord, ClientError>;
    async fn update_user(&self, id: i64, user: &UserRecord) -> Result<Value, ClientError>;
    async fn delete_user(&self, id: i64) -> Result<Value, ClientError>;
}
