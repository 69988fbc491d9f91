//! Customer profile endpoints.

mod types;

pub use types::*;

use crate::error::AuthorizeNetError;
use crate::rest::AuthorizeNetClient;
use crate::rest::endpoints::actions;
use crate::transport::HttpTransport;

impl<T: HttpTransport> AuthorizeNetClient<T> {
    /// Get the IDs of all existing customer profiles.
    ///
    /// A gateway-level failure (HTTP 200 with `resultCode: "Error"`) is
    /// returned as data; check [`CustomerProfileIds::messages`].
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use authorizenet_api_client::rest::AuthorizeNetClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = AuthorizeNetClient::new("api_login_id", "transaction_key", true);
    ///     let profiles = client.get_customer_profile_ids().await?;
    ///     for id in &profiles.ids {
    ///         println!("{id}");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_customer_profile_ids(&self) -> Result<CustomerProfileIds, AuthorizeNetError> {
        let request = self.build_request(actions::GET_CUSTOMER_PROFILE_IDS, &())?;
        self.fetch(request).await
    }
}
