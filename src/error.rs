//! Error types for the Authorize.net client library.

use thiserror::Error;

/// The main error type for all Authorize.net client operations.
#[derive(Error, Debug)]
pub enum AuthorizeNetError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// A custom transport failed before producing a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The gateway answered with a status outside `200..300`
    #[error("Status: {status}")]
    Response {
        /// HTTP status code returned by the gateway
        status: u16,
        /// Response body, decoded when it was valid JSON
        body: ResponseBody,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// The request could not be built from the given action and arguments
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A successful response whose body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A request was dispatched after it had been cleared
    #[error("Invalid state: no request has been built")]
    InvalidState,

    /// Missing required credentials
    #[error("Missing credentials: API login ID and transaction key required")]
    MissingCredentials,
}

impl AuthorizeNetError {
    /// HTTP status code carried by a [`AuthorizeNetError::Response`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Body of a non-successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// The body was valid JSON
    Json(serde_json::Value),
    /// The body could not be decoded and is kept verbatim
    Raw(String),
}

impl ResponseBody {
    /// The decoded JSON body, if decoding succeeded.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }
}

impl std::fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{}", value),
            Self::Raw(text) => f.write_str(text),
        }
    }
}

/// An error message reported by the gateway inside the `messages` block.
///
/// Authorize.net reports most failures with HTTP 200 and
/// `resultCode: "Error"`, so these are surfaced as data rather than as
/// [`AuthorizeNetError`] variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The gateway message code (e.g., "E00007")
    pub code: String,
    /// Human-readable message text
    pub text: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.text)
    }
}

impl ApiError {
    /// Create a new API error from code and text.
    pub fn new(code: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            text: text.into(),
        }
    }

    /// Check if the merchant credentials were rejected.
    pub fn is_authentication_failed(&self) -> bool {
        self.code == error_codes::AUTHENTICATION_FAILED
    }

    /// Check if the merchant account is not allowed to call the action.
    pub fn is_permission_denied(&self) -> bool {
        self.code == error_codes::PERMISSION_DENIED
    }

    /// Check if the requested record does not exist.
    pub fn is_record_not_found(&self) -> bool {
        self.code == error_codes::RECORD_NOT_FOUND
    }

    /// Check if the gateway could not parse the request envelope.
    pub fn is_malformed_request(&self) -> bool {
        matches!(
            self.code.as_str(),
            error_codes::INVALID_REQUEST | error_codes::UNRECOGNIZED_ELEMENT
        )
    }
}

/// Known Authorize.net message codes for pattern matching.
pub mod error_codes {
    /// An error occurred during processing
    pub const GENERAL_ERROR: &str = "E00001";
    /// The content type specified is not supported
    pub const UNSUPPORTED_CONTENT_TYPE: &str = "E00002";
    /// The request could not be parsed
    pub const INVALID_REQUEST: &str = "E00003";
    /// The element is not recognized in the request
    pub const UNRECOGNIZED_ELEMENT: &str = "E00004";
    /// User authentication failed due to invalid authentication values
    pub const AUTHENTICATION_FAILED: &str = "E00007";
    /// The user does not have permission to call the API
    pub const PERMISSION_DENIED: &str = "E00011";
    /// The record cannot be found
    pub const RECORD_NOT_FOUND: &str = "E00040";
    /// Request completed successfully
    pub const SUCCESSFUL: &str = "I00001";
}
