use crate::domain::response::{
    session::Session,
    user::{Role, UserRecord},
};
use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynSessionStore = Arc<dyn SessionStoreTrait + Send + Sync>;

#[async_trait]
pub trait SessionStoreTrait: Send + Sync + std::fmt::Debug {
    async fn store(&self, token: &str, user: &UserRecord) -> Result<(), ClientError>;
    async fn read(&self) -> Result<Option<UserRecord>, ClientError>;
    async fn token(&self) -> Result<Option<String>, ClientError>;
    async fn update_user(&self, user: &UserRecord) -> Result<(), ClientError>;
    async fn clear(&self) -> Result<(), ClientError>;

    async fn is_authenticated(&self) -> Result<bool, ClientError> {
        Ok(self.token().await?.is_some())
    }

    async fn has_role(&self, role: &Role) -> Result<bool, ClientError> {
        Ok(self
            .read()
            .await?
            .is_some_and(|user| user.role.as_ref() == Some(role)))
    }

    async fn snapshot(&self) -> Result<Session, ClientError> {
        Ok(Session {
            token: self.token().await?,
            user: self.read().await?,
        })
    }
}
