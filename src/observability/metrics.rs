//! Metrics collection and exposition.
//!
//! # Metrics
//! - `overdue_logger_requests_total` (counter): responses by status code,
//!   including those produced by middleware (405, 408, 413)
//! - `overdue_logger_lines_appended_total` (counter): records written
//! - `overdue_logger_append_duration_seconds` (histogram): file append latency
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Count a handled request by its response status.
pub fn record_request(status: u16) {
    counter!("overdue_logger_requests_total", "status" => status.to_string()).increment(1);
}

/// Middleware counting every response leaving the stack.
pub async fn track_status(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    record_request(response.status().as_u16());
    response
}

/// Record a successful append that began at `start`.
pub fn record_append(start: Instant) {
    counter!("overdue_logger_lines_appended_total").increment(1);
    histogram!("overdue_logger_append_duration_seconds").record(start.elapsed().as_secs_f64());
}
