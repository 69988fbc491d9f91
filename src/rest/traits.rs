//! Trait definition for the Authorize.net API client.
//!
//! [`AuthorizeNetApi`] abstracts the endpoint methods so callers can depend
//! on the trait and substitute mock implementations in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use authorizenet_api_client::rest::AuthorizeNetApi;
//!
//! async fn count_profiles<C: AuthorizeNetApi>(client: &C) -> Result<usize, authorizenet_api_client::AuthorizeNetError> {
//!     Ok(client.get_customer_profile_ids().await?.ids.len())
//! }
//! ```

use std::future::Future;

use crate::error::AuthorizeNetError;
use crate::rest::AuthorizeNetClient;
use crate::rest::customer_profiles::CustomerProfileIds;
use crate::transport::HttpTransport;

/// Trait defining the Authorize.net endpoint operations.
pub trait AuthorizeNetApi: Send + Sync {
    /// Get the IDs of all existing customer profiles.
    fn get_customer_profile_ids(
        &self,
    ) -> impl Future<Output = Result<CustomerProfileIds, AuthorizeNetError>> + Send;
}

impl<T: HttpTransport> AuthorizeNetApi for AuthorizeNetClient<T> {
    async fn get_customer_profile_ids(&self) -> Result<CustomerProfileIds, AuthorizeNetError> {
        AuthorizeNetClient::get_customer_profile_ids(self).await
    }
}
