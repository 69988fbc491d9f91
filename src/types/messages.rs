//! The `messages` block carried by every gateway response.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Overall outcome reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultCode {
    /// The request was processed
    Ok,
    /// The request failed; see the accompanying messages
    Error,
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultCode::Ok => write!(f, "Ok"),
            ResultCode::Error => write!(f, "Error"),
        }
    }
}

/// A single gateway message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message code (e.g., "I00001", "E00007")
    pub code: String,
    /// Human-readable text
    pub text: String,
}

/// Result code plus the list of messages explaining it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Messages {
    /// Overall outcome
    pub result_code: ResultCode,
    /// Detail messages
    #[serde(default)]
    pub message: Vec<Message>,
}

impl Messages {
    /// Whether the gateway reported success.
    pub fn is_ok(&self) -> bool {
        self.result_code == ResultCode::Ok
    }

    /// The first message as an [`ApiError`] when the gateway reported an error.
    pub fn first_error(&self) -> Option<ApiError> {
        if self.is_ok() {
            return None;
        }
        self.message
            .first()
            .map(|m| ApiError::new(m.code.clone(), m.text.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_ok() {
        let json = r#"{"resultCode":"Ok","message":[{"code":"I00001","text":"Successful."}]}"#;
        let messages: Messages = serde_json::from_str(json).unwrap();
        assert!(messages.is_ok());
        assert!(messages.first_error().is_none());
        assert_eq!(messages.message[0].code, "I00001");
    }

    #[test]
    fn test_messages_error() {
        let json = r#"{
            "resultCode": "Error",
            "message": [{"code": "E00007", "text": "User authentication failed due to invalid authentication values."}]
        }"#;
        let messages: Messages = serde_json::from_str(json).unwrap();
        let error = messages.first_error().unwrap();
        assert!(error.is_authentication_failed());
    }

    #[test]
    fn test_messages_missing_list() {
        let messages: Messages = serde_json::from_str(r#"{"resultCode":"Error"}"#).unwrap();
        assert!(!messages.is_ok());
        assert!(messages.first_error().is_none());
    }
}
