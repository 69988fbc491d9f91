//! Customer profile types.

use serde::{Deserialize, Serialize};

use crate::types::Messages;

/// Response of `getCustomerProfileIdsRequest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfileIds {
    /// IDs of every customer profile on the merchant account
    #[serde(default)]
    pub ids: Vec<String>,
    /// Gateway result messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Messages>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_gateway_response() {
        let json = r#"{
            "ids": ["47988", "47997", "48458"],
            "messages": {
                "resultCode": "Ok",
                "message": [{"code": "I00001", "text": "Successful."}]
            }
        }"#;
        let response: CustomerProfileIds = serde_json::from_str(json).unwrap();
        assert_eq!(response.ids, vec!["47988", "47997", "48458"]);
        assert!(response.messages.unwrap().is_ok());
    }

    #[test]
    fn test_deserialize_error_without_ids() {
        let json = r#"{
            "messages": {
                "resultCode": "Error",
                "message": [{"code": "E00007", "text": "User authentication failed due to invalid authentication values."}]
            }
        }"#;
        let response: CustomerProfileIds = serde_json::from_str(json).unwrap();
        assert!(response.ids.is_empty());
        let error = response.messages.and_then(|m| m.first_error()).unwrap();
        assert!(error.is_authentication_failed());
    }
}
