//! Observability for the artist catalog service
//!
//! - Structured logging via tracing
//! - Prometheus request metrics
//!
//! ```ignore
//! use observability::{init_logging, LogFormat};
//!
//! init_logging("artistd", LogFormat::Pretty)?;
//! observability::init_metrics("0.0.0.0", 9090)?;
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{init_logging, LogFormat};
pub use metrics::{init_metrics, HttpMetrics};
