//! Request values produced by [`AuthorizeNetClient::build_request`].
//!
//! [`AuthorizeNetClient::build_request`]: crate::rest::AuthorizeNetClient::build_request

use std::collections::BTreeMap;

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::auth::Credentials;
use crate::error::AuthorizeNetError;
use crate::rest::endpoints::headers;
use crate::transport::HttpRequest;

const MERCHANT_AUTHENTICATION: &str = "merchantAuthentication";

/// A request built for one gateway action, ready to be dispatched.
///
/// Each call builds its own value and [`fetch`] consumes it, so a client can
/// have any number of requests in flight. A cleared request is rejected by
/// [`fetch`] with [`AuthorizeNetError::InvalidState`].
///
/// [`fetch`]: crate::rest::AuthorizeNetClient::fetch
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PendingRequest {
    action: String,
    headers: Vec<(String, String)>,
    method: Method,
    body: String,
}

impl PendingRequest {
    /// Build the request envelope for `action`.
    ///
    /// The body has the shape the gateway expects:
    /// `{"<action>": {"merchantAuthentication": {...}, ...args}}`, with the
    /// authentication block first. The gateway validates element order
    /// against its schema, so `args` keep the order they serialize in.
    /// Surrounding whitespace in `action` is ignored.
    pub(crate) fn new<P>(
        credentials: &Credentials,
        action: &str,
        args: &P,
    ) -> Result<Self, AuthorizeNetError>
    where
        P: Serialize + ?Sized,
    {
        let action = action.trim();
        if action.is_empty() {
            return Err(AuthorizeNetError::InvalidRequest(
                "action must not be empty".to_string(),
            ));
        }

        let mut args = match serde_json::to_value(args)? {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(AuthorizeNetError::InvalidRequest(format!(
                    "arguments for {} must encode to a JSON object, got {}",
                    action, other
                )));
            }
        };
        args.shift_remove(MERCHANT_AUTHENTICATION);

        let envelope = Envelope {
            merchant_authentication: MerchantAuthentication {
                name: &credentials.api_login_id,
                transaction_key: credentials.expose_transaction_key(),
            },
            args,
        };
        let body = serde_json::to_string(&BTreeMap::from([(action, envelope)]))?;

        let headers = vec![
            (CONTENT_TYPE.as_str().to_string(), headers::APPLICATION_JSON.to_string()),
            (
                headers::AUTH_EMAIL.to_string(),
                credentials.expose_transaction_key().to_string(),
            ),
            (headers::AUTH_KEY.to_string(), credentials.api_login_id.clone()),
        ];

        Ok(Self {
            action: action.to_string(),
            headers,
            method: Method::POST,
            body,
        })
    }

    /// The gateway action this request targets.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// All request headers in the order they are sent.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// HTTP method; always POST for a built request.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Serialized JSON body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether this request has been cleared (or was never built).
    pub fn is_empty(&self) -> bool {
        self.action.is_empty()
    }

    /// Reset the request to empty. Idempotent.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn into_http(self, url: &str) -> HttpRequest {
        HttpRequest {
            url: url.to_string(),
            method: self.method,
            headers: self.headers,
            body: self.body,
        }
    }
}

// Headers and body both carry the transaction key.
impl std::fmt::Debug for PendingRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header_names: Vec<&str> = self.headers.iter().map(|(k, _)| k.as_str()).collect();
        f.debug_struct("PendingRequest")
            .field("action", &self.action)
            .field("method", &self.method)
            .field("headers", &header_names)
            .field("body_len", &self.body.len())
            .finish()
    }
}

#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(rename = "merchantAuthentication")]
    merchant_authentication: MerchantAuthentication<'a>,
    #[serde(flatten)]
    args: Map<String, Value>,
}

#[derive(Serialize)]
struct MerchantAuthentication<'a> {
    name: &'a str,
    #[serde(rename = "transactionKey")]
    transaction_key: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn credentials() -> Credentials {
        Credentials::new("login-id", "txn-key")
    }

    #[test]
    fn test_request_headers_and_method() {
        let request = PendingRequest::new(&credentials(), "x", &json!({"a": 1})).unwrap();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("X-Auth-Email"), Some("txn-key"));
        assert_eq!(request.header("X-Auth-Key"), Some("login-id"));
        assert_eq!(request.action(), "x");
    }

    #[test]
    fn test_request_body_envelope() {
        let request = PendingRequest::new(&credentials(), "x", &json!({"a": 1})).unwrap();
        let body: Value = serde_json::from_str(request.body()).unwrap();
        assert_eq!(body["x"]["a"], 1);
        assert_eq!(body["x"]["merchantAuthentication"]["name"], "login-id");
        assert_eq!(body["x"]["merchantAuthentication"]["transactionKey"], "txn-key");
    }

    #[test]
    fn test_merchant_authentication_serialized_first() {
        let request =
            PendingRequest::new(&credentials(), "x", &json!({"aaa": 1, "refId": "7"})).unwrap();
        assert!(request.body().starts_with(r#"{"x":{"merchantAuthentication":"#));
    }

    #[test]
    fn test_caller_merchant_authentication_replaced() {
        let args = json!({"merchantAuthentication": {"name": "other"}});
        let request = PendingRequest::new(&credentials(), "x", &args).unwrap();
        let body: Value = serde_json::from_str(request.body()).unwrap();
        assert_eq!(body["x"]["merchantAuthentication"]["name"], "login-id");
    }

    #[test]
    fn test_unit_args_produce_empty_envelope() {
        let request = PendingRequest::new(&credentials(), "x", &()).unwrap();
        let body: Value = serde_json::from_str(request.body()).unwrap();
        let inner = body["x"].as_object().unwrap();
        assert_eq!(inner.len(), 1);
        assert!(inner.contains_key("merchantAuthentication"));
    }

    #[test]
    fn test_non_object_args_rejected() {
        let err = PendingRequest::new(&credentials(), "x", &json!([1, 2])).unwrap_err();
        assert!(matches!(err, AuthorizeNetError::InvalidRequest(_)));
    }

    #[test]
    fn test_empty_action_rejected() {
        let err = PendingRequest::new(&credentials(), "", &()).unwrap_err();
        assert!(matches!(err, AuthorizeNetError::InvalidRequest(_)));
    }

    #[test]
    fn test_whitespace_action_rejected() {
        let err = PendingRequest::new(&credentials(), "  ", &()).unwrap_err();
        assert!(matches!(err, AuthorizeNetError::InvalidRequest(_)));
    }

    #[test]
    fn test_action_is_trimmed() {
        let request = PendingRequest::new(&credentials(), " x ", &json!({"a": 1})).unwrap();
        assert_eq!(request.action(), "x");
        assert!(request.body().starts_with(r#"{"x":{"#));
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct TransactionRequest {
        transaction_type: &'static str,
        amount: &'static str,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct CreateTransaction {
        ref_id: &'static str,
        transaction_request: TransactionRequest,
    }

    #[test]
    fn test_args_keep_declaration_order() {
        let args = CreateTransaction {
            ref_id: "123",
            transaction_request: TransactionRequest {
                transaction_type: "authCaptureTransaction",
                amount: "5",
            },
        };
        let request = PendingRequest::new(&credentials(), "createTransactionRequest", &args).unwrap();
        let expected = concat!(
            r#"{"createTransactionRequest":{"#,
            r#""merchantAuthentication":{"name":"login-id","transactionKey":"txn-key"},"#,
            r#""refId":"123","#,
            r#""transactionRequest":{"transactionType":"authCaptureTransaction","amount":"5"}}}"#
        );
        assert_eq!(request.body(), expected);
    }

    #[test]
    fn test_replaced_merchant_authentication_keeps_order() {
        let args = json!({"refId": "1", "merchantAuthentication": {}, "zeta": 1, "alpha": 2});
        let request = PendingRequest::new(&credentials(), "x", &args).unwrap();
        let body = request.body();
        let ref_id = body.find(r#""refId""#).unwrap();
        let zeta = body.find(r#""zeta""#).unwrap();
        let alpha = body.find(r#""alpha""#).unwrap();
        assert!(ref_id < zeta && zeta < alpha);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut request = PendingRequest::new(&credentials(), "x", &()).unwrap();
        assert!(!request.is_empty());
        request.clear();
        assert!(request.is_empty());
        assert!(request.headers().is_empty());
        assert!(request.body().is_empty());
        request.clear();
        assert_eq!(request, PendingRequest::default());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let request = PendingRequest::new(&credentials(), "x", &()).unwrap();
        let debug_str = format!("{:?}", request);
        assert!(!debug_str.contains("txn-key"));
        assert!(debug_str.contains("X-Auth-Email"));
    }
}
