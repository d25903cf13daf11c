use crate::errors::StorageError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynKeyValueStore = Arc<dyn KeyValueStoreTrait + Send + Sync>;

/// Persistent string key-value store, the analogue of browser local storage.
#[async_trait]
pub trait KeyValueStoreTrait: Send + Sync + std::fmt::Debug {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Backends able to write several keys in one operation override this.
    async fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.set(key, value).await?;
        }
        Ok(())
    }

    async fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        for key in keys {
            self.remove(key).await?;
        }
        Ok(())
    }
}
