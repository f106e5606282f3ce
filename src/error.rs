use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_json::json;
use tracing::{error, warn};
use validator::ValidationErrors;

use crate::store::StoreError;
use crate::timezone::TimeError;

/// Detail returned for every rejected input; the actual cause only goes to the log.
pub const GENERIC_DETAIL: &str = "Invalid data format or internal error";

#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

fn detail(status: StatusCode, msg: &str) -> Response {
    (status, Json(json!({ "detail": msg }))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(cause) => {
                warn!(%cause, "rejected request");
                detail(StatusCode::BAD_REQUEST, GENERIC_DETAIL)
            }
            ApiError::BadRequest(msg) => detail(StatusCode::BAD_REQUEST, &msg),
            ApiError::NotFound(msg) => detail(StatusCode::NOT_FOUND, &msg),
            ApiError::Internal(cause) => {
                error!(%cause, "request failed");
                detail(StatusCode::BAD_REQUEST, GENERIC_DETAIL)
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::ClassNotFound(_) => ApiError::NotFound("Class not found".into()),
            StoreError::NoSlotsAvailable(_) => ApiError::BadRequest("No slots available".into()),
            StoreError::Poisoned => ApiError::Internal(value.to_string()),
        }
    }
}

impl From<TimeError> for ApiError {
    fn from(value: TimeError) -> Self {
        ApiError::Validation(value.to_string())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(value: ValidationErrors) -> Self {
        ApiError::Validation(value.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        ApiError::Validation(value.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(value: QueryRejection) -> Self {
        ApiError::Validation(value.body_text())
    }
}
