//! # Request Metrics
//!
//! In-process atomic counters, exposed at `GET /v1/metrics`.
//!
//! `requests` and `errors` are maintained by [`metrics_middleware`]; an error
//! is any 4xx/5xx response. `validations` and `violations` are recorded by the
//! validate handlers, so a payload with findings is not an error here.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shared metrics state.
#[derive(Debug, Clone, Default)]
pub struct ApiMetrics {
    request_count: Arc<AtomicU64>,
    error_count: Arc<AtomicU64>,
    validation_count: Arc<AtomicU64>,
    violation_count: Arc<AtomicU64>,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MetricsSnapshot {
    /// Requests completed through the API router.
    pub requests: u64,
    /// Requests answered with a 4xx or 5xx status.
    pub errors: u64,
    /// Validation runs, whatever their outcome.
    pub validations: u64,
    /// Diagnostics reported across all validation runs.
    pub violations: u64,
}

impl ApiMetrics {
    /// Create a new metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one validation run that produced `violations` diagnostics.
    pub fn record_validation(&self, violations: usize) {
        self.validation_count.fetch_add(1, Ordering::Relaxed);
        self.violation_count
            .fetch_add(violations as u64, Ordering::Relaxed);
    }

    /// Read all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.request_count.load(Ordering::Relaxed),
            errors: self.error_count.load(Ordering::Relaxed),
            validations: self.validation_count.load(Ordering::Relaxed),
            violations: self.violation_count.load(Ordering::Relaxed),
        }
    }
}

/// Middleware that increments request and error counters.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let metrics = request.extensions().get::<ApiMetrics>().cloned();

    let response = next.run(request).await;

    if let Some(m) = metrics {
        m.request_count.fetch_add(1, Ordering::Relaxed);
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            m.error_count.fetch_add(1, Ordering::Relaxed);
        }
    }

    response
}
