use serde_json::Value;

pub const FALLBACK_MESSAGE: &str = "API Error";

/// Failure body as sent by the storefront backend.
///
/// Only `message` is read; the rest of the body may have any shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorResponse {
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn from_body(body: &[u8]) -> Self {
        let message = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|value| value.get("message")?.as_str().map(str::to_string))
            .filter(|message| !message.is_empty());

        Self { message }
    }

    pub fn message_or_fallback(body: &[u8]) -> String {
        Self::from_body(body)
            .message
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
    }
}
