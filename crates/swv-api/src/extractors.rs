//! # Request Extraction
//!
//! Maps Axum's JSON rejections onto [`AppError::BadRequest`] so every
//! malformed body gets the same structured 400.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
///
/// Handlers take `Result<Json<T>, JsonRejection>` and pass it through here,
/// which covers a missing content type, invalid JSON, and missing fields.
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}
