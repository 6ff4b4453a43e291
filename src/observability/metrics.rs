//! Metrics collection and exposition.
//!
//! # Metrics
//! - `routemill_routes_registered_total` (counter): registrations by method, outcome
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - Prometheus endpoint is opt-in via config

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its HTTP listener.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one route registration attempt.
pub fn record_registration(method: &str, outcome: &'static str) {
    ::metrics::counter!(
        "routemill_routes_registered_total",
        "method" => method.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}
