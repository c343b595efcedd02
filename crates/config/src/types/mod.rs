//! Configuration type definitions for the custom object portal.
//!
//! Responsibilities:
//! - Define configuration types for the HubSpot connection, authentication,
//!   the configured custom object triple and the listener.
//! - Ensure consistent defaults and type safety across the configuration system.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - Every `PropertyField` has a non-empty key; its label falls back to the key.

mod auth;
pub(crate) mod connection;
mod object;
mod server;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
pub use object::{ObjectConfig, PropertyField};
pub use server::ServerConfig;
