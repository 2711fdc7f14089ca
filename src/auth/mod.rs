//! Authentication module
//!
//! Supports: API Key, Basic, Bearer, Custom Headers
//!
//! The `Authenticator` applies the configured credentials to every request
//! the HTTP client sends.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, Location};
