//! Dashboard Error Types
//!
//! This module provides dashboard-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Dashboard-specific result type alias
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Dashboard-specific error variants
#[derive(Debug, Error)]
pub enum DashboardError {
    /// KPI source failed to produce a sample
    #[error("KPI source error: {0}")]
    Source(String),
}

impl DashboardError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::Source(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DashboardError::Source(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::internal(self.to_string())
    }

    fn log(&self) {
        match self {
            DashboardError::Source(msg) => {
                tracing::error!(message = %msg, "KPI source failed");
            }
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
