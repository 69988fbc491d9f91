//! Authorize.net REST client.
//!
//! Every gateway action is a POST of a JSON envelope to a single endpoint.
//! [`AuthorizeNetClient::build_request`] produces a [`PendingRequest`] for an
//! action, and [`AuthorizeNetClient::fetch`] dispatches it and decodes the
//! response. Endpoint methods such as
//! [`AuthorizeNetClient::get_customer_profile_ids`] are thin wrappers over
//! that pair.

mod client;
pub mod customer_profiles;
mod endpoints;
mod request;
mod traits;

pub use client::{AuthorizeNetClient, AuthorizeNetClientBuilder, is_status_ok};
pub use endpoints::*;
pub use request::PendingRequest;
pub use traits::AuthorizeNetApi;
