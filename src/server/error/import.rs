use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, matches::DuplicateMatchDto},
    server::model::matches::Match,
};

#[derive(Error, Debug)]
pub enum ImportError {
    /// The CSV could not be read at all (bad header, broken quoting).
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid CSV: {0}")]
    InvalidCsv(String),

    /// Every row was skipped as spectator or malformed.
    ///
    /// Results in a 400 Bad Request response.
    #[error("CSV contains no valid player rows ({skipped} rows skipped)")]
    NoValidRows { skipped: u64 },

    /// A required request field is empty.
    ///
    /// Results in a 400 Bad Request response.
    #[error("{0}")]
    InvalidRequest(String),

    /// The `(matchid, mapnumber)` pair was imported before.
    ///
    /// Results in a 409 Conflict response carrying the existing match.
    #[error("Match has already been imported")]
    Duplicate(Box<Match>),
}

impl IntoResponse for ImportError {
    fn into_response(self) -> Response {
        match self {
            Self::Duplicate(existing) => (
                StatusCode::CONFLICT,
                Json(DuplicateMatchDto {
                    error: "Match has already been imported".to_string(),
                    existing_match: (*existing).into_dto(),
                }),
            )
                .into_response(),
            err => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
