use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cart is empty.")]
    EmptyCart,

    #[error("No valid items.")]
    NoValidItems,

    #[error("Invalid item or quantity found in cart.")]
    InvalidItem,

    #[error("Server encountered a database error. Please try again.")]
    DbError(#[from] sqlx::Error),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::EmptyCart | AppError::NoValidItems | AppError::InvalidItem => {
                StatusCode::BAD_REQUEST
            }
            AppError::DbError(err) => {
                // Clients get the generic message; the cause stays in the logs.
                tracing::error!(error = %err, "database error while handling request");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            message: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
