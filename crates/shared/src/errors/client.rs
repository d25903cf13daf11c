use crate::errors::storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not logged in")]
    Unauthenticated,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ClientError {
    /// The single line a front-end shows for this failure.
    pub fn message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Validation(errors) => errors.join(", "),
            ClientError::Forbidden(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        ClientError::Decode(error.to_string())
    }
}
