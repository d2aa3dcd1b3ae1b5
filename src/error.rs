use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum BookshelfError {
    #[error("book not found")]
    BookNotFound,

    #[error("invalid request payload")]
    InvalidPayload,

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl IntoResponse for BookshelfError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            BookshelfError::BookNotFound => (
                StatusCode::NOT_FOUND,
                ApiMessageBody {
                    message: "Book not found".to_string(),
                },
            ),

            BookshelfError::InvalidPayload => (
                StatusCode::BAD_REQUEST,
                ApiMessageBody {
                    message: "Invalid request payload".to_string(),
                },
            ),

            // Store failures surface the underlying error text as-is.
            BookshelfError::DatabaseError(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiMessageBody {
                    message: e.to_string(),
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiMessageBody {
    pub message: String,
}
