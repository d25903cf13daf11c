mod client;
mod error;
mod storage;

pub use self::client::ClientError;
pub use self::error::{ErrorResponse, FALLBACK_MESSAGE};
pub use self::storage::StorageError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let body = br#"{"status":"error","message":"Invalid credentials"}"#;
        assert_eq!(ErrorResponse::message_or_fallback(body), "Invalid credentials");
    }

    #[test]
    fn fallback_when_message_missing_or_body_garbled() {
        assert_eq!(ErrorResponse::message_or_fallback(br#"{"error":"x"}"#), FALLBACK_MESSAGE);
        assert_eq!(ErrorResponse::message_or_fallback(b"<html>502</html>"), FALLBACK_MESSAGE);
        assert_eq!(ErrorResponse::message_or_fallback(b""), FALLBACK_MESSAGE);
    }

    #[test]
    fn numeric_status_does_not_hide_the_message() {
        let body = br#"{"status":401,"message":"Invalid credentials"}"#;
        assert_eq!(ErrorResponse::message_or_fallback(body), "Invalid credentials");

        let nested = br#"{"status":{"code":500},"message":"Database unavailable","errors":[1]}"#;
        assert_eq!(ErrorResponse::message_or_fallback(nested), "Database unavailable");
    }

    #[test]
    fn empty_or_non_string_message_falls_back() {
        assert_eq!(ErrorResponse::message_or_fallback(br#"{"message":""}"#), FALLBACK_MESSAGE);
        assert_eq!(ErrorResponse::message_or_fallback(br#"{"message":null}"#), FALLBACK_MESSAGE);
        assert_eq!(ErrorResponse::message_or_fallback(br#"{"message":42}"#), FALLBACK_MESSAGE);
        assert_eq!(ErrorResponse::message_or_fallback(br#"[1,2]"#), FALLBACK_MESSAGE);
    }

    #[test]
    fn api_error_displays_only_the_message() {
        let err = ClientError::Api {
            status: 409,
            message: "Email already taken".into(),
        };
        assert_eq!(err.to_string(), "Email already taken");
        assert_eq!(err.message(), "Email already taken");
        assert_eq!(err.status(), Some(409));
    }
}
