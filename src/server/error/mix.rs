use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum MixError {
    /// The user reached the no-show penalty limit.
    ///
    /// Results in a 403 Forbidden response with the body `{"error": "suspended"}`.
    #[error("suspended")]
    Suspended { penalties: u64 },

    /// The user already has a signup for the day.
    ///
    /// Results in a 409 Conflict response.
    #[error("Already signed up for the mix on {0}")]
    AlreadySignedUp(NaiveDate),

    /// The user has no signup to withdraw for the day.
    ///
    /// Results in a 404 Not Found response.
    #[error("Not signed up for the mix on {0}")]
    NotSignedUp(NaiveDate),

    /// Signups for days that already passed are closed.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Cannot sign up for a past date ({0})")]
    DateInPast(NaiveDate),
}

impl IntoResponse for MixError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Suspended { .. } => StatusCode::FORBIDDEN,
            Self::AlreadySignedUp(_) => StatusCode::CONFLICT,
            Self::NotSignedUp(_) => StatusCode::NOT_FOUND,
            Self::DateInPast(_) => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
