use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id found in the session.
    ///
    /// The request either carries no session cookie or the session has expired.
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user found in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists.
    ///
    /// Usually means the account was deleted while a session was still live.
    /// Results in a 404 Not Found response.
    ///
    /// # Fields
    /// - The stale user id taken from the session
    #[error("User {0} found in session but not in database")]
    UserNotInDatabase(i32),

    /// The authenticated user lacks the role required for the endpoint.
    ///
    /// Results in a 403 Forbidden response. The detail message is logged
    /// server-side only.
    ///
    /// # Fields
    /// - Id of the user that was denied
    /// - Detail message describing what was attempted
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login failed due to a bad username/password combination.
    ///
    /// Deliberately does not distinguish unknown users from wrong passwords.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The authenticated account has no pilot profile attached.
    ///
    /// Pilot-facing endpoints (check-in, protests, profile) require one.
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - Id of the user without a profile
    #[error("User {0} has no pilot profile")]
    NoPilotProfile(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly
/// error messages. Denied-access details are logged at debug level while the
/// client-facing messages stay generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For missing sessions and bad credentials
/// - 403 Forbidden - For insufficient roles and missing pilot profiles
/// - 404 Not Found - For sessions referencing deleted users
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in to access this resource.".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!("Session referenced missing user {}", user_id);
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(user_id, detail) => {
                tracing::debug!("Access denied for user {}: {}", user_id, detail);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to access this resource.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password.".to_string(),
                }),
            )
                .into_response(),
            Self::NoPilotProfile(user_id) => {
                tracing::debug!("User {} has no pilot profile", user_id);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "This account has no pilot profile.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
