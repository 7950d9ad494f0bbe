use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rand::{rngs::StdRng, SeedableRng};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        casino::{
            BalanceDto, BetDto, CaseResultDto, OddsDto, OddsQuery, OpenCaseDto, PlaceBetDto,
            SpinDto, SpinResultDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{bet::BetType, casino::CaseKind},
        service::{bet::BetService, casino::CasinoService},
        state::AppState,
    },
};

/// Tag for grouping casino and betting endpoints in OpenAPI documentation
pub static CASINO_TAG: &str = "casino";

/// Get the caller's chip balance, creating it with the starting chips on first access.
#[utoipa::path(
    get,
    path = "/api/casino/balance",
    tag = CASINO_TAG,
    responses(
        (status = 200, description = "Current balance", body = BalanceDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_balance(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let balance = CasinoService::new(&state.db).get_balance(user.id).await?;

    Ok((StatusCode::OK, Json(balance.into_dto(CasinoService::today()))))
}

/// Claim the daily bonus, once per UTC day.
#[utoipa::path(
    post,
    path = "/api/casino/daily",
    tag = CASINO_TAG,
    responses(
        (status = 200, description = "Balance after the bonus", body = BalanceDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Already claimed today", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn claim_daily(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let today = CasinoService::today();

    let balance = CasinoService::new(&state.db)
        .claim_daily(user.id, today)
        .await?;

    Ok((StatusCode::OK, Json(balance.into_dto(today))))
}

/// Spin the slot machine.
#[utoipa::path(
    post,
    path = "/api/casino/spin",
    tag = CASINO_TAG,
    request_body = SpinDto,
    responses(
        (status = 200, description = "Reels, payout and new balance", body = SpinResultDto),
        (status = 400, description = "Bet out of range or insufficient balance", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn spin(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SpinDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let mut rng = StdRng::from_os_rng();

    let outcome = CasinoService::new(&state.db)
        .spin(user.id, payload.bet, &mut rng)
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

/// Open a case.
#[utoipa::path(
    post,
    path = "/api/casino/cases",
    tag = CASINO_TAG,
    request_body = OpenCaseDto,
    responses(
        (status = 200, description = "Drawn rarity, reward and new balance", body = CaseResultDto),
        (status = 400, description = "Insufficient balance", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn open_case(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<OpenCaseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let mut rng = StdRng::from_os_rng();

    let outcome = CasinoService::new(&state.db)
        .open_case(user.id, CaseKind::from_dto(payload.case), &mut rng)
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

/// Price a bet on a player from their match history.
#[utoipa::path(
    get,
    path = "/api/casino/odds",
    tag = CASINO_TAG,
    params(
        ("targetUserId" = i32, Query, description = "Player to bet on"),
        ("betType" = String, Query, description = "kills_over, kd_over, mvp or win"),
        ("threshold" = Option<f64>, Query, description = "Required for kills_over and kd_over")
    ),
    responses(
        (status = 200, description = "Current odds", body = OddsDto),
        (status = 400, description = "Missing threshold", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_odds(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<OddsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let odds = BetService::new(&state.db)
        .odds(
            query.target_user_id,
            BetType::from_dto(query.bet_type),
            query.threshold,
        )
        .await?;

    Ok((StatusCode::OK, Json(odds.into_dto())))
}

/// Place a bet at the current odds.
///
/// The stake is debited immediately; the bet settles when the next match of the
/// target player is imported.
#[utoipa::path(
    post,
    path = "/api/casino/bets",
    tag = CASINO_TAG,
    request_body = PlaceBetDto,
    responses(
        (status = 201, description = "Pending bet", body = BetDto),
        (status = 400, description = "Self bet, bad stake, missing threshold or insufficient balance", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_bet(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PlaceBetDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bet = BetService::new(&state.db)
        .place(
            user.id,
            payload.target_user_id,
            BetType::from_dto(payload.bet_type),
            payload.threshold,
            payload.amount,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(bet.into_dto())))
}

/// Get the caller's bets, newest first.
#[utoipa::path(
    get,
    path = "/api/casino/bets",
    tag = CASINO_TAG,
    responses(
        (status = 200, description = "Bets placed by the caller", body = Vec<BetDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_bets(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bets = BetService::new(&state.db).get_mine(user.id).await?;
    let bets_dto: Vec<BetDto> = bets.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bets_dto)))
}
