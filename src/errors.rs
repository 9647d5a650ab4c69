use axum::http::StatusCode;
use thiserror::Error;

/// Rejected form input. The display text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields before submitting.")]
    MissingField,
    #[error("Please choose a valid category.")]
    InvalidCategory,
    #[error("Duration and calories must be numeric values.")]
    NotNumeric,
    #[error("Duration must be a positive number.")]
    NonPositiveDuration,
    #[error("Calories cannot be negative.")]
    NegativeCalories,
    #[error("Invalid profile data: {0}")]
    InvalidProfile(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("Please save your profile before exporting a report.")]
    ProfileRequired,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
