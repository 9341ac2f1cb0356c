//! Unified error model
//! Maps every failure to an HTTP status, a stable reason slug and a
//! user-safe message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A stored account is mis-provisioned (e.g. empty password hash).
    /// Surfaced to the caller as a generic internal error so hash
    /// presence is never leaked, but logged as a provisioning fault.
    #[error("Configuration fault: {0}")]
    ConfigurationFault(String),

    /// Wrong password or unknown principal. One variant for both, so
    /// the external error shape cannot leak account existence.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    ExpiredToken,

    #[error("Access denied")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials
            | AppError::MissingToken
            | AppError::InvalidToken
            | AppError::ExpiredToken => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_)
            | AppError::Config(_)
            | AppError::ConfigurationFault(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable slug. The 401 variants each get their
    /// own slug so clients can distinguish a missing header from a bad
    /// or expired token.
    pub fn reason(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::MissingToken => "missing_credential",
            AppError::InvalidToken => "invalid_credential",
            AppError::ExpiredToken => "expired_credential",
            AppError::Forbidden => "access_denied",
            AppError::NotFound(_) => "not_found",
            AppError::Validation(_) => "validation_failed",
            AppError::Conflict(_) => "conflict",
            AppError::Database(_)
            | AppError::Config(_)
            | AppError::ConfigurationFault(_)
            | AppError::Internal(_) => "internal_error",
        }
    }

    /// User-facing message (no sensitive detail)
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidCredentials => "Invalid credentials".to_string(),
            AppError::MissingToken => "Missing bearer token".to_string(),
            AppError::InvalidToken => "Invalid token".to_string(),
            AppError::ExpiredToken => "Token expired".to_string(),
            AppError::Forbidden => "Access denied".to_string(),
            AppError::NotFound(msg) => format!("Resource not found: {}", msg),
            AppError::Validation(msg) => msg.clone(),
            AppError::Conflict(msg) => msg.clone(),
            AppError::Database(_)
            | AppError::Config(_)
            | AppError::ConfigurationFault(_)
            | AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// HTTP status code as a number
    pub fn code(&self) -> u16 {
        self.status_code().as_u16()
    }

    // Convenience constructors
    pub fn not_found(msg: &str) -> Self {
        AppError::NotFound(msg.to_string())
    }

    pub fn validation(msg: &str) -> Self {
        AppError::Validation(msg.to_string())
    }

    pub fn conflict(msg: &str) -> Self {
        AppError::Conflict(msg.to_string())
    }

    pub fn configuration_fault(msg: &str) -> Self {
        AppError::ConfigurationFault(msg.to_string())
    }

    pub fn internal_error(msg: &str) -> Self {
        AppError::Internal(msg.to_string())
    }
}

/// Error response DTO
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: u16,
    pub reason: &'static str,
    pub message: String,
    pub request_id: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let request_id = uuid::Uuid::new_v4().to_string();

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: self.code(),
                reason: self.reason(),
                message: self.user_message(),
                request_id,
            },
        };

        // Server-side faults keep full detail in the log; a
        // provisioning fault is tagged so operators can find
        // mis-provisioned accounts.
        match &self {
            AppError::ConfigurationFault(detail) => {
                tracing::error!(
                    code = self.code(),
                    detail = %detail,
                    request_id = %error_response.error.request_id,
                    "Account provisioning fault"
                );
            }
            AppError::Database(_) | AppError::Config(_) | AppError::Internal(_) => {
                tracing::error!(
                    code = self.code(),
                    message = %self,
                    request_id = %error_response.error.request_id,
                    "Application error"
                );
            }
            _ => {
                tracing::debug!(
                    code = self.code(),
                    message = %self,
                    request_id = %error_response.error.request_id,
                    "Request rejected"
                );
            }
        }

        (status, Json(error_response)).into_response()
    }
}

impl From<config::ConfigError> for AppError {
    fn from(e: config::ConfigError) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::InvalidCredentials.code(), 401);
        assert_eq!(AppError::MissingToken.code(), 401);
        assert_eq!(AppError::ExpiredToken.code(), 401);
        assert_eq!(AppError::Forbidden.code(), 403);
        assert_eq!(AppError::NotFound("member".to_string()).code(), 404);
        assert_eq!(AppError::Validation("bad".to_string()).code(), 400);
        assert_eq!(AppError::Conflict("dup".to_string()).code(), 400);
        assert_eq!(AppError::ConfigurationFault("x".to_string()).code(), 500);
    }

    #[test]
    fn test_unauthorized_reasons_are_distinguishable() {
        assert_eq!(AppError::MissingToken.reason(), "missing_credential");
        assert_eq!(AppError::InvalidToken.reason(), "invalid_credential");
        assert_eq!(AppError::ExpiredToken.reason(), "expired_credential");
        assert_eq!(AppError::InvalidCredentials.reason(), "invalid_credentials");
    }

    #[test]
    fn test_user_message_no_sensitive_info() {
        let error = AppError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.user_message(), "Internal server error");

        let fault = AppError::ConfigurationFault("member 42 has empty hash".to_string());
        assert_eq!(fault.user_message(), "Internal server error");
        assert!(!fault.user_message().contains("hash"));
    }
}
