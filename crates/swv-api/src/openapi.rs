//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into one OpenAPI document, served
//! at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the validator API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Swagger Validator API",
        version = "0.1.0",
        description = "Validate JSON payloads against the component schemas of a swagger document.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::validate::validate_legacy,
        crate::routes::validate::validate_report,
        crate::routes::metrics::metrics,
    ),
    components(schemas(
        crate::routes::validate::ValidateRequest,
        crate::routes::validate::ValidationReport,
        crate::routes::validate::Violation,
        crate::routes::validate::ReportError,
        crate::middleware::metrics::MetricsSnapshot,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "validate", description = "Payload validation"),
        (name = "metrics", description = "Service counters"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
