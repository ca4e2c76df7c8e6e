//! Server configuration
//!
//! Read from the environment at startup:
//! - `CABINET_BIND`: socket address to listen on (default `127.0.0.1:3000`)
//! - `RUST_LOG`: tracing filter, consumed by `init_tracing`

use std::net::SocketAddr;

use cabinet_core::{Error, Result};

const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Runtime configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub bind: SocketAddr,
}

impl ServerConfig {
    /// Load configuration from the environment, applying defaults
    pub fn load() -> Result<Self> {
        let bind = std::env::var("CABINET_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let bind = bind
            .parse()
            .map_err(|e| Error::Validation(format!("invalid CABINET_BIND address: {e}")))?;
        Ok(Self { bind })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            // DEFAULT_BIND is a valid literal address.
            bind: DEFAULT_BIND.parse().expect("default bind address"),
        }
    }
}
