//! Authorize.net API client implementation.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::{Credentials, CredentialsProvider, StaticCredentials};
use crate::error::{AuthorizeNetError, ResponseBody};
use crate::rest::endpoints::Environment;
use crate::rest::request::PendingRequest;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Check if an HTTP status code is a success (`200..300`).
pub fn is_status_ok(code: u16) -> bool {
    (200..300).contains(&code)
}

/// The Authorize.net API client.
///
/// Holds the merchant credentials and the target environment. Each call
/// builds its own [`PendingRequest`], so a client can be cloned and shared
/// across tasks freely.
///
/// # Example
///
/// ```rust,no_run
/// use authorizenet_api_client::rest::AuthorizeNetClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = AuthorizeNetClient::new("api_login_id", "transaction_key", true);
///
///     let profiles = client.get_customer_profile_ids().await?;
///     println!("Customer profiles: {:?}", profiles.ids);
///
///     Ok(())
/// }
/// ```
///
/// Any other action can be called through the generic request lifecycle:
///
/// ```rust,no_run
/// use authorizenet_api_client::rest::AuthorizeNetClient;
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = AuthorizeNetClient::new("api_login_id", "transaction_key", true);
///
///     let request = client.build_request(
///         "getCustomerProfileRequest",
///         &json!({ "customerProfileId": "10000" }),
///     )?;
///     let profile: serde_json::Value = client.fetch(request).await?;
///     println!("{profile}");
///
///     Ok(())
/// }
/// ```
pub struct AuthorizeNetClient<T = ReqwestTransport> {
    transport: Arc<T>,
    base_url: String,
    environment: Environment,
    credentials: Arc<dyn CredentialsProvider>,
}

impl AuthorizeNetClient {
    /// Create a client using the default transport.
    ///
    /// `use_sandbox` selects the sandbox endpoint instead of production.
    pub fn new(
        api_login_id: impl Into<String>,
        transaction_key: impl Into<String>,
        use_sandbox: bool,
    ) -> Self {
        let environment = Environment::from_sandbox(use_sandbox);
        Self::with_transport(
            ReqwestTransport::new(),
            Arc::new(StaticCredentials::new(api_login_id, transaction_key)),
            environment,
        )
    }

    /// Create a new client builder.
    pub fn builder() -> AuthorizeNetClientBuilder {
        AuthorizeNetClientBuilder::new()
    }
}

impl<T: HttpTransport> AuthorizeNetClient<T> {
    /// Create a client that dispatches through `transport`.
    pub fn with_transport(
        transport: T,
        credentials: Arc<dyn CredentialsProvider>,
        environment: Environment,
    ) -> Self {
        Self {
            transport: Arc::new(transport),
            base_url: environment.base_url().to_string(),
            environment,
            credentials,
        }
    }

    /// The environment this client was configured for.
    ///
    /// When the builder was given a [`base_url`] override, requests go to
    /// that URL and this only reports the environment that was selected
    /// alongside it. Use [`AuthorizeNetClient::base_url`] for the actual
    /// target.
    ///
    /// [`base_url`]: AuthorizeNetClientBuilder::base_url
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// The URL every request is sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured merchant credentials.
    pub fn credentials(&self) -> &Credentials {
        self.credentials.get_credentials()
    }

    /// Build a request for a gateway action.
    ///
    /// `args` must serialize to a JSON object (or to null, e.g. `&()`, for an
    /// action without arguments). It is wrapped in the gateway envelope keyed
    /// by `action`, with the merchant authentication block inserted first.
    /// No I/O happens here.
    pub fn build_request<P>(&self, action: &str, args: &P) -> Result<PendingRequest, AuthorizeNetError>
    where
        P: Serialize + ?Sized,
    {
        PendingRequest::new(self.credentials.get_credentials(), action, args)
    }

    /// Dispatch a built request and decode the response.
    ///
    /// The request is consumed whatever the outcome. A status outside
    /// `200..300` yields [`AuthorizeNetError::Response`] carrying the status
    /// and the body (decoded when possible). A successful response whose body
    /// is not valid JSON, or does not match `R`, yields
    /// [`AuthorizeNetError::InvalidResponse`]. Use `serde_json::Value` for `R`
    /// to receive the body undecoded.
    pub async fn fetch<R>(&self, request: PendingRequest) -> Result<R, AuthorizeNetError>
    where
        R: DeserializeOwned,
    {
        if request.is_empty() {
            return Err(AuthorizeNetError::InvalidState);
        }

        let action = request.action().to_string();
        tracing::debug!(action = %action, url = %self.base_url, "dispatching request");

        let response = self.transport.send(request.into_http(&self.base_url)).await?;
        let status = response.status;
        let decoded = decode_body(&response.body);

        if !is_status_ok(status) {
            tracing::warn!(action = %action, status, "gateway returned non-success status");
            let body = match decoded {
                Ok(value) => ResponseBody::Json(value),
                Err(_) => ResponseBody::Raw(response.body),
            };
            return Err(AuthorizeNetError::Response { status, body });
        }

        let value = decoded.map_err(|e| {
            AuthorizeNetError::InvalidResponse(format!(
                "Failed to parse response: {}. Body: {}",
                e, response.body
            ))
        })?;

        serde_json::from_value(value).map_err(|e| {
            AuthorizeNetError::InvalidResponse(format!(
                "Unexpected response for {}: {}. Body: {}",
                action, e, response.body
            ))
        })
    }
}

/// Decode a response body, skipping the byte order mark the gateway
/// prepends to JSON responses.
fn decode_body(body: &str) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::from_str(body.trim_start_matches('\u{feff}'))
}

impl<T> Clone for AuthorizeNetClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            base_url: self.base_url.clone(),
            environment: self.environment,
            credentials: Arc::clone(&self.credentials),
        }
    }
}

impl<T> std::fmt::Debug for AuthorizeNetClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizeNetClient")
            .field("base_url", &self.base_url)
            .field("environment", &self.environment)
            .field("credentials", self.credentials.get_credentials())
            .finish()
    }
}

/// Builder for [`AuthorizeNetClient`].
pub struct AuthorizeNetClientBuilder {
    environment: Environment,
    base_url: Option<String>,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl AuthorizeNetClientBuilder {
    /// Create a new builder targeting production.
    pub fn new() -> Self {
        Self {
            environment: Environment::Production,
            base_url: None,
            credentials: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Set the credentials provider.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Target the sandbox endpoint when `use_sandbox` is true.
    pub fn sandbox(mut self, use_sandbox: bool) -> Self {
        self.environment = Environment::from_sandbox(use_sandbox);
        self
    }

    /// Set the environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Override the endpoint URL (useful for testing with a mock server).
    ///
    /// The override takes precedence over the environment's URL; the
    /// environment setting is kept as-is and still reported by
    /// [`AuthorizeNetClient::environment`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a custom user agent for the default transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a request timeout for the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client with the default `reqwest` transport.
    pub fn build(self) -> Result<AuthorizeNetClient, AuthorizeNetError> {
        let transport = ReqwestTransport::with_options(self.user_agent.as_deref(), self.timeout);
        self.build_with_transport(transport)
    }

    /// Build the client with a custom transport.
    ///
    /// The user agent and timeout settings only apply to the default
    /// transport and are ignored here.
    pub fn build_with_transport<T: HttpTransport>(
        self,
        transport: T,
    ) -> Result<AuthorizeNetClient<T>, AuthorizeNetError> {
        let credentials = self.credentials.ok_or(AuthorizeNetError::MissingCredentials)?;

        let base_url = match self.base_url {
            Some(url) => {
                url::Url::parse(&url)?;
                url
            }
            None => self.environment.base_url().to_string(),
        };

        Ok(AuthorizeNetClient {
            transport: Arc::new(transport),
            base_url,
            environment: self.environment,
            credentials,
        })
    }
}

impl Default for AuthorizeNetClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
