//! Authentication module for the Authorize.net API.
//!
//! Authorize.net authenticates every request with the merchant's API login ID
//! and transaction key. This module provides credential storage that keeps the
//! transaction key out of `Debug` output, and providers for loading them.

mod credentials;

pub use credentials::{
    Credentials, CredentialsProvider, EnvCredentials, LOGIN_ID_VAR, StaticCredentials,
    TRANSACTION_KEY_VAR,
};
