//! # swv-api — HTTP Service for the Swagger Validator
//!
//! Wraps the `swv-schema` engine in an Axum service.
//!
//! ## API Surface
//!
//! | Route                  | Module                      | Response              |
//! |------------------------|-----------------------------|-----------------------|
//! | `POST /api/validate`   | [`routes::validate`]        | bare `[String]` list  |
//! | `POST /v1/validate`    | [`routes::validate`]        | `ValidationReport`    |
//! | `GET /v1/metrics`      | [`routes::metrics`]         | `MetricsSnapshot`     |
//! | `GET /openapi.json`    | [`openapi`]                 | OpenAPI document      |
//! | `GET /health/*`        | this module                 | `ok` / `ready`        |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → AuthMiddleware → Handler
//! ```

pub mod auth;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::Router;

use crate::auth::AuthConfig;
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) are mounted outside the auth middleware
/// so they remain accessible without credentials.
pub fn app(state: AppState) -> Router {
    let auth_config = AuthConfig {
        token: state.config.auth_token.clone(),
    };
    let metrics = state.metrics.clone();

    let api = Router::new()
        .merge(routes::validate::router())
        .merge(routes::metrics::router())
        .merge(openapi::router())
        .layer(from_fn(auth::auth_middleware))
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(middleware::tracing_layer::layer())
        .layer(axum::Extension(auth_config))
        .layer(axum::Extension(metrics))
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe: 200 while the process is up.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: the service holds no external connections, so it is
/// ready as soon as it is listening.
async fn readiness() -> &'static str {
    "ready"
}
