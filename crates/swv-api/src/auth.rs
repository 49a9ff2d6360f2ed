//! # Bearer Token Authentication
//!
//! Optional static bearer token. When `AUTH_TOKEN` is unset every request is
//! allowed; when set, `/api/*`, `/v1/*` and `/openapi.json` require
//! `Authorization: Bearer <token>`. Health probes are mounted outside this
//! middleware.

use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;

use crate::error::AppError;

/// Auth configuration injected into request extensions.
///
/// Custom `Debug` redacts the token value to prevent credential leakage in logs.
#[derive(Clone)]
pub struct AuthConfig {
    pub token: Option<String>,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Constant-time comparison of bearer tokens.
///
/// On a length mismatch a dummy comparison still runs so timing does not
/// reveal the expected length.
fn constant_time_token_eq(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();
    if provided.len() != expected.len() {
        let _ = expected.ct_eq(expected);
        return false;
    }
    provided.ct_eq(expected).into()
}

/// Check the `Authorization` header against the configured token.
pub async fn auth_middleware(request: Request, next: Next) -> Response {
    let expected = request
        .extensions()
        .get::<AuthConfig>()
        .and_then(|c| c.token.clone());

    let Some(expected) = expected else {
        return next.run(request).await;
    };

    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let rejection = match header_value {
        Some(value) => match value.strip_prefix("Bearer ") {
            Some(provided) if constant_time_token_eq(provided, &expected) => None,
            Some(_) => Some("invalid bearer token"),
            None => Some("authorization header must use Bearer scheme"),
        },
        None => Some("missing authorization header"),
    };

    match rejection {
        None => next.run(request).await,
        Some(reason) => {
            tracing::warn!(reason, "authentication failed");
            AppError::Unauthorized(reason.to_string()).into_response()
        }
    }
}
