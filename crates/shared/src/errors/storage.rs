use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] deadpool_redis::redis::RedisError),

    #[error("Redis pool error: {0}")]
    Pool(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl From<deadpool_redis::PoolError> for StorageError {
    fn from(error: deadpool_redis::PoolError) -> Self {
        StorageError::Pool(error.to_string())
    }
}
