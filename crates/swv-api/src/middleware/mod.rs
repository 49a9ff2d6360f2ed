//! # Middleware
//!
//! - `metrics` — request/error counters plus validation totals.
//! - `tracing_layer` — per-request spans via tower-http.

pub mod metrics;
pub mod tracing_layer;
