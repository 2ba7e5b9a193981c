//! Cats Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Cats-specific result type alias
pub type CatsResult<T> = Result<T, CatsError>;

/// Cats-specific error variants
#[derive(Debug, Error)]
pub enum CatsError {
    /// Sighting does not exist
    #[error("Cat not found")]
    CatNotFound,

    /// Comment does not exist
    #[error("Comment not found")]
    CommentNotFound,

    /// Authenticated, but not the author of the resource
    #[error("Only the author may do that")]
    Forbidden,

    /// Request body failed validation
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatsError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatsError::CatNotFound | CatsError::CommentNotFound => StatusCode::NOT_FOUND,
            CatsError::Forbidden => StatusCode::FORBIDDEN,
            CatsError::Validation(_) => StatusCode::BAD_REQUEST,
            CatsError::Database(_) | CatsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CatsError::CatNotFound | CatsError::CommentNotFound => ErrorKind::NotFound,
            CatsError::Forbidden => ErrorKind::Forbidden,
            CatsError::Validation(_) => ErrorKind::BadRequest,
            CatsError::Database(_) | CatsError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            CatsError::Database(_) | CatsError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            CatsError::Database(e) => {
                tracing::error!(error = %e, "Cats database error");
            }
            CatsError::Internal(msg) => {
                tracing::error!(message = %msg, "Cats internal error");
            }
            CatsError::Forbidden => {
                tracing::warn!("Ownership check refused a mutation");
            }
            _ => {
                tracing::debug!(error = %self, "Cats error");
            }
        }
    }
}

impl IntoResponse for CatsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CatsError::CatNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            CatsError::CommentNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(CatsError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            CatsError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatsError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_withheld() {
        let err = CatsError::Database(sqlx::Error::PoolClosed);
        assert_eq!(err.to_app_error().message(), "Internal server error");
    }
}
