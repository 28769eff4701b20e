//! Error types and HTTP response handling.
//!
//! `AppError` is the closed set of failures every layer returns. Its `IntoResponse`
//! implementation is the single place where failures become HTTP responses: the body
//! is always an `ErrorDto` and the status is the one computed for the variant.

pub mod auth;
pub mod config;
pub mod image;
pub mod token;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, image::ImageError},
};

/// Client-facing message for rejected request fields.
pub const INVALID_INPUTS: &str = "Invalid inputs passed, please check your data.";

/// Top-level application error type.
///
/// Variants carrying a client message (`Validation`, `NotFound`, `Conflict`) are shown
/// to the caller verbatim. Infrastructure failures are logged and answered with a
/// generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for the status mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failure writing or removing an uploaded image.
    #[error(transparent)]
    ImageErr(#[from] ImageError),

    /// Failure signing a token.
    #[error(transparent)]
    TokenErr(#[from] jsonwebtoken::errors::Error),

    /// Failure hashing or verifying a password.
    #[error(transparent)]
    HashErr(#[from] argon2::password_hash::Error),

    /// Malformed multipart body.
    ///
    /// Responds with the status axum computed for the rejection.
    #[error(transparent)]
    MultipartErr(#[from] MultipartError),

    /// The request could not be extracted: malformed JSON, wrong content type, or a
    /// path parameter of the wrong type.
    ///
    /// Responds with the status axum computed for the rejection.
    #[error("{1}")]
    Rejected(StatusCode, String),

    /// Request data failed validation.
    ///
    /// Results in 422 Unprocessable Entity with the provided message.
    #[error("{0}")]
    Validation(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// The request collides with existing state (duplicate title or email, booked
    /// listing).
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        tracing::debug!("Rejected request fields: {}", err);
        AppError::Validation(INVALID_INPUTS.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected JSON body: {}", rejection.body_text());

        match rejection {
            // Well-formed JSON that does not fit the expected fields
            JsonRejection::JsonDataError(_) => AppError::Validation(INVALID_INPUTS.to_string()),
            rejection => AppError::Rejected(rejection.status(), rejection.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::Rejected(rejection.status(), rejection.body_text())
    }
}

/// Builds the JSON error response for a status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            message: message.into(),
            code: status.as_u16(),
        }),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Conflict`
/// - 404 Not Found - For `NotFound`
/// - 422 Unprocessable Entity - For `Validation`
/// - Variable - For `AuthErr` (delegated), `MultipartErr` and `Rejected` (axum's status)
/// - 500 Internal Server Error - For every infrastructure failure
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(msg) => error_response(StatusCode::UNPROCESSABLE_ENTITY, msg),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::MultipartErr(err) => error_response(err.status(), err.body_text()),
            Self::Rejected(status, msg) => error_response(status, msg),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details never reach
/// the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
