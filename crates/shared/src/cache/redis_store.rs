use crate::{abstract_trait::KeyValueStoreTrait, errors::StorageError};
use async_trait::async_trait;
use chrono::Duration;
use deadpool_redis::{
    Connection, Pool,
    redis::{self, AsyncCommands},
};
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Clone)]
pub struct RedisStore {
    pool: Arc<Pool>,
    prefix: String,
    ttl: Option<Duration>,
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore")
            .field("prefix", &self.prefix)
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl RedisStore {
    pub fn new(pool: Pool, prefix: impl Into<String>, ttl: Option<Duration>) -> Self {
        Self {
            pool: Arc::new(pool),
            prefix: prefix.into(),
            ttl,
        }
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    async fn get_conn(&self) -> Result<Connection, StorageError> {
        match self.pool.get().await {
            Ok(conn) => Ok(conn),
            Err(e) => {
                error!("Failed to get Redis connection from pool: {:?}", e);
                Err(e.into())
            }
        }
    }
}

#[async_trait]
impl KeyValueStoreTrait for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn.get(self.key(key)).await?;

        if value.is_none() {
            debug!("Key not found: {}", self.key(key));
        }
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_many(&[(key, value)]).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut conn = self.get_conn().await?;
        conn.del::<_, ()>(self.key(key)).await?;
        debug!("Deleted key: {}", self.key(key));
        Ok(())
    }

    async fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let mut conn = self.get_conn().await?;
        let mut pipe = redis::pipe();
        pipe.atomic();

        for (key, value) in entries {
            let cmd = pipe.cmd("SET").arg(self.key(key)).arg(*value);
            if let Some(ttl) = self.ttl {
                cmd.arg("EX").arg(ttl.num_seconds());
            }
            cmd.ignore();
        }

        match pipe.query_async::<()>(&mut conn).await {
            Ok(()) => {
                debug!("Stored {} keys with TTL {:?}", entries.len(), self.ttl);
                Ok(())
            }
            Err(e) => {
                error!("Failed to store keys: {:?}", e);
                Err(e.into())
            }
        }
    }

    async fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        if keys.is_empty() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        let prefixed: Vec<String> = keys.iter().map(|key| self.key(key)).collect();
        conn.del::<_, ()>(prefixed).await?;
        Ok(())
    }
}
