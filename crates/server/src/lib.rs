//! Server infrastructure for the artist catalog service
//!
//! The [`Server`] trait gives every server the same lifecycle: bind, serve
//! until a `CancellationToken` fires, drain. [`ServerExt`] adds `spawn()`
//! and `run_with_ctrl_c()`.
//!
//! ```ignore
//! use server::{HttpServer, ServerConfig, ServerExt};
//!
//! let server = HttpServer::new(ServerConfig::default(), router);
//! server.run_with_ctrl_c().await?;
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod shutdown;
pub mod traits;

pub use config::{ServerConfig, DEFAULT_HTTP_PORT};
pub use error::{Result, ServerError};
pub use http::HttpServer;
pub use shutdown::ShutdownController;
pub use traits::{Server, ServerExt};
