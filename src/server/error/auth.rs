use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Bearer token missing, malformed, wrongly signed or expired.
    ///
    /// Every cause produces the same response so callers cannot probe which check failed.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Authenticated user is not allowed to perform the operation.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Client-facing message
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Token refers to a user that no longer exists.
    #[error("User {0} not found in database")]
    UserNotInDatabase(i32),

    /// Login password did not match the stored hash.
    #[error("Password mismatch for user {0}")]
    PasswordMismatch(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// - `AuthenticationFailed` → 401 "Authentication Failed"
/// - `AccessDenied` → 401 with the carried message
/// - `UserNotInDatabase` → 404 "Could not find a user for the provided id."
/// - `PasswordMismatch` → 401 "Password is incorrect."
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AuthenticationFailed => {
                error_response(StatusCode::UNAUTHORIZED, "Authentication Failed")
            }
            Self::AccessDenied(_, message) => error_response(StatusCode::UNAUTHORIZED, message),
            Self::UserNotInDatabase(_) => error_response(
                StatusCode::NOT_FOUND,
                "Could not find a user for the provided id.",
            ),
            Self::PasswordMismatch(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Password is incorrect.")
            }
        }
    }
}
