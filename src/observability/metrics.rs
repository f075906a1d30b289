//! Metrics collection and exposition.
//!
//! # Metrics
//! - `dev_server_requests_total` (counter): requests by kind (mock/asset) and status
//! - `dev_server_request_duration_seconds` (histogram): latency by kind
//!
//! Recording is a no-op until a recorder is installed, so handlers call
//! these unconditionally.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled request.
pub fn record_request(kind: &'static str, status: u16, start: Instant) {
    ::metrics::counter!(
        "dev_server_requests_total",
        "kind" => kind,
        "status" => status.to_string()
    )
    .increment(1);
    ::metrics::histogram!("dev_server_request_duration_seconds", "kind" => kind)
        .record(start.elapsed().as_secs_f64());
}
