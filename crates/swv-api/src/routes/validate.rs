//! # Validation Endpoints
//!
//! Both endpoints take the same body and resolve the root schema name the
//! same way: `?schema=` query parameter, then the body's `schema` field, then
//! the configured `DEFAULT_SCHEMA`. Empty values count as absent. When no
//! name is found the engine reports `Please specify a schema name`.
//!
//! The engine runs on the blocking pool, since a large document or payload
//! can take a while to walk.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use swv_core::{ValidationError, ValidatorError};
use swv_schema::validate_str;

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Request body for both validate endpoints.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateRequest {
    /// Swagger/OpenAPI document text (YAML or JSON).
    pub swagger: String,
    /// JSON payload text to validate.
    pub data: String,
    /// Root schema name, used when the query does not give one.
    #[serde(default)]
    pub schema: Option<String>,
}

/// Query parameters for both validate endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SchemaQuery {
    /// Root schema name. Takes precedence over the body.
    pub schema: Option<String>,
}

/// Structured outcome of one validation run.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationReport {
    /// Root schema name the payload was checked against.
    pub schema: String,
    /// `true` when there are no violations and no error.
    pub valid: bool,
    /// Field-level findings, in traversal order.
    pub violations: Vec<Violation>,
    /// Whole-call failure (decode error, unknown schema, missing name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ReportError>,
}

/// One field-level finding.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Violation {
    /// Location of the finding, rooted at the schema name (`User.tags[]`).
    pub path: String,
    /// Full diagnostic line, path prefix included.
    pub message: String,
}

/// A whole-call failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReportError {
    /// One of `missing_schema_name`, `input_decode`, `schema_decode`,
    /// `unknown_schema` or `cycle_or_depth_exceeded`.
    pub kind: String,
    /// Human-readable error message.
    pub message: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/validate", post(validate_legacy))
        .route("/v1/validate", post(validate_report))
}

/// POST /api/validate — Validate and return a bare list of diagnostics.
#[utoipa::path(
    post,
    path = "/api/validate",
    params(SchemaQuery),
    request_body = ValidateRequest,
    responses(
        (status = 200, description = "Diagnostics; empty when the payload is valid", body = Vec<String>),
        (status = 400, description = "Malformed request body", body = crate::error::ErrorBody),
        (status = 401, description = "Missing or invalid bearer token", body = crate::error::ErrorBody),
    ),
    tag = "validate"
)]
pub async fn validate_legacy(
    State(state): State<AppState>,
    Query(query): Query<SchemaQuery>,
    body: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<Vec<String>>, AppError> {
    let req = extract_json(body)?;
    let (_, result) = run(&state, query, req).await?;

    let messages = match result {
        Ok(violations) => violations.iter().map(ToString::to_string).collect(),
        Err(err) => vec![err.to_string()],
    };
    Ok(Json(messages))
}

/// POST /v1/validate — Validate and return a structured report.
#[utoipa::path(
    post,
    path = "/v1/validate",
    params(SchemaQuery),
    request_body = ValidateRequest,
    responses(
        (status = 200, description = "Validation report", body = ValidationReport),
        (status = 400, description = "Malformed request body", body = crate::error::ErrorBody),
        (status = 401, description = "Missing or invalid bearer token", body = crate::error::ErrorBody),
    ),
    tag = "validate"
)]
pub async fn validate_report(
    State(state): State<AppState>,
    Query(query): Query<SchemaQuery>,
    body: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidationReport>, AppError> {
    let req = extract_json(body)?;
    let (schema, result) = run(&state, query, req).await?;

    let report = match result {
        Ok(violations) => ValidationReport {
            schema,
            valid: violations.is_empty(),
            violations: violations
                .into_iter()
                .map(|v| Violation {
                    path: v.path,
                    message: v.message,
                })
                .collect(),
            error: None,
        },
        Err(err) => ValidationReport {
            schema,
            valid: false,
            violations: Vec::new(),
            error: Some(ReportError {
                kind: err.kind().to_string(),
                message: err.to_string(),
            }),
        },
    };
    Ok(Json(report))
}

/// Pick the root schema name: query, then body, then configured default.
fn schema_name(state: &AppState, query: Option<String>, body: Option<String>) -> String {
    query
        .filter(|s| !s.is_empty())
        .or_else(|| body.filter(|s| !s.is_empty()))
        .or_else(|| state.config.default_schema.clone())
        .unwrap_or_default()
}

type EngineResult = Result<Vec<ValidationError>, ValidatorError>;

async fn run(
    state: &AppState,
    query: SchemaQuery,
    req: ValidateRequest,
) -> Result<(String, EngineResult), AppError> {
    let schema = schema_name(state, query.schema, req.schema);

    let root = schema.clone();
    let result = tokio::task::spawn_blocking(move || validate_str(&req.data, &req.swagger, &root))
        .await?;

    let reported = match &result {
        Ok(violations) => violations.len(),
        Err(_) => 1,
    };
    state.metrics.record_validation(reported);

    match &result {
        Ok(violations) => tracing::info!(%schema, violations = violations.len(), "validated payload"),
        Err(err) => tracing::info!(%schema, kind = err.kind(), "validation failed: {err}"),
    }

    Ok((schema, result))
}
