use crate::{abstract_trait::session::SessionStoreTrait, domain::response::user::UserRecord};
use async_trait::async_trait;
use shared::{abstract_trait::DynKeyValueStore, errors::ClientError};
use tracing::{debug, info, warn};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Bearer token and cached user record kept in a key-value backend.
///
/// Built once by the composition root and handed to everything that needs
/// the session; nothing else touches the two keys.
#[derive(Debug, Clone)]
pub struct SessionContext {
    store: DynKeyValueStore,
}

impl SessionContext {
    pub fn new(store: DynKeyValueStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionStoreTrait for SessionContext {
    async fn store(&self, token: &str, user: &UserRecord) -> Result<(), ClientError> {
        let user_json = serde_json::to_string(user)?;

        self.store
            .set_many(&[(TOKEN_KEY, token), (USER_KEY, user_json.as_str())])
            .await?;

        info!("Session stored for user {}", user.id);
        Ok(())
    }

    async fn read(&self) -> Result<Option<UserRecord>, ClientError> {
        let Some(raw) = self.store.get(USER_KEY).await? else {
            debug!("No user in session");
            return Ok(None);
        };

        match serde_json::from_str::<UserRecord>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!("Ignoring unreadable stored user record: {e}");
                Ok(None)
            }
        }
    }

    async fn token(&self) -> Result<Option<String>, ClientError> {
        Ok(self
            .store
            .get(TOKEN_KEY)
            .await?
            .filter(|token| !token.is_empty()))
    }

    async fn update_user(&self, user: &UserRecord) -> Result<(), ClientError> {
        let user_json = serde_json::to_string(user)?;

        // Token and user share one write so their expiries stay equal.
        match self.token().await? {
            Some(token) => {
                self.store
                    .set_many(&[(TOKEN_KEY, token.as_str()), (USER_KEY, user_json.as_str())])
                    .await?
            }
            None => self.store.set(USER_KEY, &user_json).await?,
        }

        debug!("Cached user record refreshed for {}", user.id);
        Ok(())
    }

    async fn clear(&self) -> Result<(), ClientError> {
        self.store.remove_many(&[TOKEN_KEY, USER_KEY]).await?;

        info!("Session cleared");
        Ok(())
    }
}
