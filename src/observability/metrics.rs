//! Metrics collection and exposition.
//!
//! # Metrics
//! - `kassa_product_lookups_total` (counter): catalog lookups by result
//! - `kassa_manager_requests_total` (counter): management API calls by outcome
//! - `kassa_manager_request_duration_seconds` (histogram): management API latency

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus scrape endpoint on `addr`.
///
/// Must be called from within the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record a catalog lookup.
pub fn record_product_lookup(found: bool) {
    let result = if found { "hit" } else { "miss" };
    metrics::counter!("kassa_product_lookups_total", "result" => result).increment(1);
}

/// Record a management API call and its latency.
pub fn record_manager_request(outcome: &'static str, start: Instant) {
    metrics::counter!("kassa_manager_requests_total", "outcome" => outcome).increment(1);
    metrics::histogram!("kassa_manager_request_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}
