use crate::{
    abstract_trait::{session::DynSessionStore, user::UserServiceTrait},
    client::{ApiClient, ApiRequest},
    domain::response::{
        envelope::{extract_list, extract_record},
        user::UserRecord,
    },
};
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::ClientError;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct UserService {
    client: ApiClient,
    session: DynSessionStore,
}

impl UserService {
    pub fn new(client: ApiClient, session: DynSessionStore) -> Self {
        Self { client, session }
    }

    async fn is_session_user(&self, id: i64) -> Result<bool, ClientError> {
        Ok(self.session.read().await?.is_some_and(|user| user.id == id))
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn find_all(&self) -> Result<Vec<UserRecord>, ClientError> {
        let value = self.client.call(ApiRequest::get("/users")).await?;
        let users: Vec<UserRecord> = extract_list(value, "users")?;

        info!("Fetched {} users", users.len());
        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> Result<UserRecord, ClientError> {
        let value = self.client.call(ApiRequest::get(format!("/users/{id}"))).await?;
        extract_record(value, "user")
    }

    async fn update_user(&self, id: i64, user: &UserRecord) -> Result<Value, ClientError> {
        let value = self
            .client
            .call(ApiRequest::put(format!("/users/{id}")).json(user)?)
            .await?;

        if self.is_session_user(id).await? {
            let mut cached = user.clone();
            cached.id = id;
            self.session.update_user(&cached).await?;
            debug!("Session user {id} refreshed after update");
        }

        Ok(value)
    }

    async fn delete_user(&self, id: i64) -> Result<Value, ClientError> {
        let value = self
            .client
            .call(ApiRequest::delete(format!("/users/{id}")))
            .await?;

        if self.is_session_user(id).await? {
            self.session.clear().await?;
            info!("Deleted the session user {id}; session cleared");
        }

        Ok(value)
    }
}
