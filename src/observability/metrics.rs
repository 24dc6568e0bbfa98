//! Metrics collection and exposition.
//!
//! # Metrics
//! - `frontdoor_requests_total` (counter): requests by method, status, route kind
//! - `frontdoor_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Labels for method, status code, and route kind
//! - Exposition via a Prometheus scrape endpoint on its own address

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address. Failure is
/// logged, not fatal; the server runs without metrics.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(error) => tracing::error!(error = %error, "Failed to install metrics exporter"),
    }
}

/// Record one dispatched request.
pub fn record_dispatch(method: &str, status: u16, kind: &str, start_time: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
        ("kind", kind.to_string()),
    ];
    metrics::counter!("frontdoor_requests_total", &labels).increment(1);
    metrics::histogram!("frontdoor_request_duration_seconds", &labels)
        .record(start_time.elapsed().as_secs_f64());
}
