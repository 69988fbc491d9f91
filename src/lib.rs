//! # Authorize.net Client
//!
//! An async Rust client library for the Authorize.net JSON API.
//!
//! ## Features
//!
//! - Generic request lifecycle for any gateway action
//! - Production and sandbox endpoints
//! - Pluggable HTTP transport with a `reqwest` default
//! - Transaction keys kept out of `Debug` output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use authorizenet_api_client::rest::AuthorizeNetClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AuthorizeNetClient::new("api_login_id", "transaction_key", true);
//!     let profiles = client.get_customer_profile_ids().await?;
//!     println!("Customer profiles: {:?}", profiles.ids);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod transport;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, AuthorizeNetError, ResponseBody};
pub use rest::{AuthorizeNetClient, Environment, PendingRequest};
pub use types::{Messages, ResultCode};

/// Result type alias using AuthorizeNetError
pub type Result<T> = std::result::Result<T, AuthorizeNetError>;
