//! Auth Error Types
//!
//! This module provides gate/login error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// The shared password is missing from the server environment
    #[error("VIEWER_PASSWORD not set")]
    PasswordNotConfigured,

    /// Submitted password does not match
    #[error("Invalid password")]
    InvalidPassword,
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::PasswordNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::InvalidPassword => StatusCode::UNAUTHORIZED,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::PasswordNotConfigured => ErrorKind::InternalServerError,
            AuthError::InvalidPassword => ErrorKind::Unauthorized,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::PasswordNotConfigured => AppError::internal(self.to_string()),
            AuthError::InvalidPassword => AppError::unauthorized(self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            AuthError::PasswordNotConfigured => {
                tracing::error!("Login attempted but VIEWER_PASSWORD is not configured");
            }
            AuthError::InvalidPassword => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
