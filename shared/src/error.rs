use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    BookingConflict(String),
    #[error("{0}")]
    ReferentialIntegrityConflict(String),
    #[error("{0}")]
    UniqueConstraintViolation(String),
    #[error("failed to execute a database query")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("failed to run a transaction")]
    TransactionError(#[source] sqlx::Error),
    #[error("no rows were affected: {0}")]
    NoRowsAffectedError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::BookingConflict(_)
            | AppError::ReferentialIntegrityConflict(_)
            | AppError::UniqueConstraintViolation(_) => StatusCode::CONFLICT,
            AppError::SpecificOperationError(_)
            | AppError::TransactionError(_)
            | AppError::NoRowsAffectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "unexpected error happened"
            );
        } else {
            tracing::warn!(
                error.cause_chain = ?self,
                error.message = %self,
                "request was rejected"
            );
        }

        let message = if status_code.is_server_error() {
            // raw database errors never reach the client
            "an internal error occurred".to_string()
        } else {
            self.to_string()
        };

        (
            status_code,
            Json(json!({ "category": "danger", "message": message })),
        )
            .into_response()
    }
}
