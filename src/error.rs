/// Error types for brain-service
///
/// Every handler returns `Result<HttpResponse, AppError>`; the
/// `ResponseError` impl converts failures to status codes plus a JSON body
/// of the shape `{"error": ..., "status": ...}`. Nothing here ever leaks a
/// stack trace to the client.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for brain-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Signup input broke one or more rules. Answered with 411 and the full
    /// list of violations, an intentional oddity of the API contract.
    #[error("Signup validation failed")]
    SignupValidation(Vec<String>),

    /// Malformed or missing input on any other endpoint
    #[error("{0}")]
    Validation(String),

    /// No Authorization header on a protected route
    #[error("Authorization header missing")]
    MissingToken,

    /// Token present but failed verification
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Unknown username or wrong password; deliberately does not say which
    #[error("Wrong username or password")]
    WrongCredentials,

    /// Duplicate username at signup
    #[error("User already exists with this username")]
    UsernameTaken,

    /// Valid token, wrong owner
    #[error("{0}")]
    Forbidden(String),

    /// Unknown id or share link
    #[error("{0}")]
    NotFound(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Unexpected internal failure
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::SignupValidation(_) => StatusCode::LENGTH_REQUIRED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MissingToken => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken
            | AppError::WrongCredentials
            | AppError::UsernameTaken
            | AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::SignupValidation(violations) => {
                HttpResponse::build(status).json(serde_json::json!({
                    "error": violations,
                    "status": status.as_u16(),
                }))
            }
            _ => HttpResponse::build(status).json(serde_json::json!({
                "error": self.to_string(),
                "status": status.as_u16(),
            })),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
