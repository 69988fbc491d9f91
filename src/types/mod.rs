//! Domain types shared across gateway actions.

pub mod messages;

pub use messages::{Message, Messages, ResultCode};
