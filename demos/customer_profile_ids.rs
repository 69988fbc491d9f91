//! Example: List customer profile IDs on the sandbox.
//!
//! Set AUTHORIZENET_API_LOGIN_ID and AUTHORIZENET_TRANSACTION_KEY (a `.env`
//! file works), then run with: cargo run --example customer_profile_ids

use std::sync::Arc;

use authorizenet_api_client::AuthorizeNetError;
use authorizenet_api_client::auth::EnvCredentials;
use authorizenet_api_client::rest::AuthorizeNetClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = EnvCredentials::from_env()?;
    let client = AuthorizeNetClient::builder()
        .credentials(Arc::new(credentials))
        .sandbox(true)
        .build()?;

    match client.get_customer_profile_ids().await {
        Ok(profiles) => {
            if let Some(error) = profiles.messages.as_ref().and_then(|m| m.first_error()) {
                println!("Gateway rejected the request: {}", error);
            } else {
                println!("{} customer profiles", profiles.ids.len());
                for id in &profiles.ids {
                    println!("  {}", id);
                }
            }
        }
        Err(AuthorizeNetError::Response { status, body }) => {
            println!("HTTP {}: {}", status, body);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
