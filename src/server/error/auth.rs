use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Happens when an admin deleted the account while it was logged in.
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session does not exist in the database")]
    UserNotInDatabase(i32),

    /// The user is logged in but lacks the required permission.
    ///
    /// Results in a 403 Forbidden response. The message is logged, not returned.
    #[error("User {0} was denied access: {1}")]
    AccessDenied(i32, String),

    /// CSRF state validation failed during the Steam callback.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Steam rejected the OpenID assertion or it did not carry a SteamID64.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Steam OpenID verification failed: {0}")]
    SteamVerificationFailed(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `CsrfValidationFailed` / `SteamVerificationFailed` → 400 Bad Request
///
/// All errors are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Forbidden"),
            Self::CsrfValidationFailed | Self::SteamVerificationFailed(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
