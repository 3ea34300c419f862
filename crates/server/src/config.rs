//! Server configuration

use crate::error::{Result, ServerError};
use std::net::SocketAddr;

/// Port the artist service listens on unless told otherwise
pub const DEFAULT_HTTP_PORT: u16 = 7000;

/// HTTP bind configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to (e.g., "0.0.0.0" or "127.0.0.1")
    pub host: String,
    /// HTTP port; 0 picks an ephemeral port
    pub http_port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, http_port: u16) -> Self {
        Self {
            host: host.into(),
            http_port,
        }
    }

    /// Parse the HTTP socket address
    pub fn http_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.http_port)
            .parse()
            .map_err(|_| ServerError::InvalidAddress(format!("{}:{}", self.host, self.http_port)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            http_port: DEFAULT_HTTP_PORT,
        }
    }
}
