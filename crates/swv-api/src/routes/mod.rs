//! # API Route Modules
//!
//! - `validate` — `POST /api/validate` (legacy bare list) and
//!   `POST /v1/validate` (structured report).
//! - `metrics` — `GET /v1/metrics`.

pub mod metrics;
pub mod validate;
