use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum CasinoError {
    /// The stake is outside the allowed range.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Bet must be between {min} and {max} chips")]
    InvalidBet { min: i64, max: i64 },

    /// The balance does not cover the stake or case price.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Insufficient balance: {balance} chips available, {required} required")]
    InsufficientBalance { balance: i64, required: i64 },

    /// The daily bonus was already claimed for the current UTC day.
    ///
    /// Results in a 409 Conflict response.
    #[error("Daily bonus already claimed today")]
    DailyAlreadyClaimed,

    /// Players cannot bet on themselves.
    ///
    /// Results in a 400 Bad Request response.
    #[error("You cannot bet on yourself")]
    SelfBet,

    /// `kills_over` and `kd_over` bets need a non-negative threshold.
    ///
    /// Results in a 400 Bad Request response.
    #[error("A non-negative threshold is required for {0} bets")]
    MissingThreshold(&'static str),
}

impl IntoResponse for CasinoError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::DailyAlreadyClaimed => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
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
