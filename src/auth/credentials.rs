//! Credential management for Authorize.net API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

use crate::error::AuthorizeNetError;

/// Default environment variable holding the API login ID.
pub const LOGIN_ID_VAR: &str = "AUTHORIZENET_API_LOGIN_ID";
/// Default environment variable holding the transaction key.
pub const TRANSACTION_KEY_VAR: &str = "AUTHORIZENET_TRANSACTION_KEY";

/// Merchant credentials: the API login ID and transaction key.
#[derive(Clone)]
pub struct Credentials {
    /// The API login ID (merchant identifier)
    pub api_login_id: String,
    /// The transaction key (private)
    transaction_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an API login ID and transaction key.
    pub fn new(api_login_id: impl Into<String>, transaction_key: impl Into<String>) -> Self {
        Self {
            api_login_id: api_login_id.into(),
            transaction_key: SecretString::from(transaction_key.into()),
        }
    }

    /// Get the transaction key.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_transaction_key(&self) -> &str {
        self.transaction_key.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_login_id", &self.api_login_id)
            .field("transaction_key", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a host application's secret store.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

impl CredentialsProvider for Credentials {
    fn get_credentials(&self) -> &Credentials {
        self
    }
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(api_login_id: impl Into<String>, transaction_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_login_id, transaction_key),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `AUTHORIZENET_API_LOGIN_ID` and
/// `AUTHORIZENET_TRANSACTION_KEY`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    pub fn from_env() -> Result<Self, AuthorizeNetError> {
        Self::from_env_vars(LOGIN_ID_VAR, TRANSACTION_KEY_VAR)
    }

    /// Create credentials from custom environment variable names.
    ///
    /// Fails with [`AuthorizeNetError::MissingCredentials`] if either variable
    /// is unset or empty.
    pub fn from_env_vars(login_id_var: &str, key_var: &str) -> Result<Self, AuthorizeNetError> {
        Self::try_from_env_vars(login_id_var, key_var).ok_or(AuthorizeNetError::MissingCredentials)
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if the environment variables are not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(LOGIN_ID_VAR, TRANSACTION_KEY_VAR)
    }

    /// Try to create credentials from custom environment variable names.
    pub fn try_from_env_vars(login_id_var: &str, key_var: &str) -> Option<Self> {
        let api_login_id = std::env::var(login_id_var).ok().filter(|v| !v.is_empty())?;
        let transaction_key = std::env::var(key_var).ok().filter(|v| !v.is_empty())?;

        Some(Self {
            credentials: Credentials::new(api_login_id, transaction_key),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("login_id", "super_secret_key");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("login_id"));
        assert!(!debug_str.contains("super_secret_key"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("login", "key");
        let creds = provider.get_credentials();
        assert_eq!(creds.api_login_id, "login");
        assert_eq!(creds.expose_transaction_key(), "key");
    }

    #[test]
    fn test_env_credentials_missing() {
        let result = EnvCredentials::from_env_vars(
            "AUTHORIZENET_TEST_UNSET_LOGIN_ID",
            "AUTHORIZENET_TEST_UNSET_TRANSACTION_KEY",
        );
        assert!(matches!(result, Err(AuthorizeNetError::MissingCredentials)));
    }
}
