use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session.
    ///
    /// The caller is not logged in. Results in a 401 Unauthorized response.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user lacks the capability required by the route.
    ///
    /// Carries the user ID and a reason for server-side logging. Results in a
    /// 403 Forbidden response.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not authenticated")
            }
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
        };

        (
            status,
            Json(ErrorDto {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}
