//! Prometheus request metrics
//!
//! # Metrics
//!
//! * `http_requests_total{method, route, status}` - requests served
//! * `http_request_duration_seconds{method, route}` - request latency

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;

/// Start the Prometheus exporter on `host:port`, serving `/metrics`
pub fn init_metrics(host: &str, port: u16) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    PrometheusBuilder::new().with_http_listener(addr).install()?;

    tracing::info!(%addr, "Metrics server listening");
    Ok(())
}

/// Per-service HTTP request metrics
///
/// Recording is a no-op until an exporter is installed.
#[derive(Debug, Clone)]
pub struct HttpMetrics {
    service: String,
}

impl HttpMetrics {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// Record one completed request
    pub fn record_request(&self, method: &str, route: &str, status: u16, duration: Duration) {
        counter!(
            "http_requests_total",
            "service" => self.service.clone(),
            "method" => method.to_string(),
            "route" => route.to_string(),
            "status" => status.to_string()
        )
        .increment(1);

        histogram!(
            "http_request_duration_seconds",
            "service" => self.service.clone(),
            "method" => method.to_string(),
            "route" => route.to_string()
        )
        .record(duration.as_secs_f64());
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}
