//! API error type and HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use buntubuild_ai::AdvisorError;
use buntubuild_core::errors::{DatabaseError, Error as CoreError};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Advisor(#[from] AdvisorError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account disabled")]
    AccountDisabled,

    #[error("Missing or invalid session token")]
    MissingToken,

    #[error("Admin access required")]
    AdminRequired,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Core(CoreError::Validation(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error")
            }
            ApiError::Core(CoreError::StateConflict(_)) => (StatusCode::CONFLICT, "state_conflict"),
            ApiError::Core(CoreError::ConstraintViolation(_)) => {
                (StatusCode::CONFLICT, "constraint_violation")
            }
            ApiError::Core(CoreError::UnsupportedCurrency(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unsupported_currency")
            }
            ApiError::Core(CoreError::Unauthorized(_)) => (StatusCode::FORBIDDEN, "forbidden"),
            ApiError::Core(CoreError::Database(DatabaseError::NotFound(_))) => {
                (StatusCode::NOT_FOUND, "not_found")
            }
            ApiError::Core(CoreError::Database(DatabaseError::UniqueViolation(_))) => {
                (StatusCode::CONFLICT, "already_exists")
            }
            ApiError::Core(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
            ApiError::Advisor(e @ AdvisorError::InvalidInput(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, e.code())
            }
            ApiError::Advisor(e @ AdvisorError::MissingApiKey) => {
                (StatusCode::SERVICE_UNAVAILABLE, e.code())
            }
            ApiError::Advisor(e) => (StatusCode::BAD_GATEWAY, e.code()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "invalid_credentials"),
            ApiError::AccountDisabled => (StatusCode::FORBIDDEN, "account_disabled"),
            ApiError::MissingToken => (StatusCode::UNAUTHORIZED, "unauthorized"),
            ApiError::AdminRequired => (StatusCode::FORBIDDEN, "admin_required"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!("{}: {}", code, self);
        }
        let body = Json(json!({
            "error": self.to_string(),
            "code": code,
        }));
        (status, body).into_response()
    }
}
