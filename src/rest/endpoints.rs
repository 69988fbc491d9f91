//! Authorize.net API endpoint constants.

/// Production gateway endpoint.
pub const PRODUCTION_URL: &str = "https://api.authorize.net/xml/v1/request.api";

/// Sandbox gateway endpoint.
pub const SANDBOX_URL: &str = "https://apitest.authorize.net/xml/v1/request.api";

/// Gateway environment a client is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// Live transactions
    #[default]
    Production,
    /// Test account endpoint
    Sandbox,
}

impl Environment {
    /// Map the sandbox flag to an environment.
    pub fn from_sandbox(use_sandbox: bool) -> Self {
        if use_sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    /// Base URL for this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_URL,
            Environment::Sandbox => SANDBOX_URL,
        }
    }

    /// Whether this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
        }
    }
}

/// Gateway action names.
pub mod actions {
    /// Retrieve all existing customer profile IDs.
    pub const GET_CUSTOMER_PROFILE_IDS: &str = "getCustomerProfileIdsRequest";
}

/// Header names attached to every request.
pub mod headers {
    /// Header carrying the transaction key.
    pub const AUTH_EMAIL: &str = "X-Auth-Email";
    /// Header carrying the API login ID.
    pub const AUTH_KEY: &str = "X-Auth-Key";
    /// Content type of every request body.
    pub const APPLICATION_JSON: &str = "application/json";
}
