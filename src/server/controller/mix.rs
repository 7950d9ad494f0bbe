use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        mix::{MixDayDto, MixPenaltyDto, NoShowDto, PenaltyQuery},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::mix::MixService,
        state::AppState,
        util::parse::parse_date,
    },
};

/// Tag for grouping mix list endpoints in OpenAPI documentation
pub static MIX_TAG: &str = "mix";

/// Get the mix list of a day.
///
/// Returns the main roster and substitutes in join order, plus the caller's own
/// status and penalty count.
#[utoipa::path(
    get,
    path = "/api/mix/{date}",
    tag = MIX_TAG,
    params(("date" = String, Path, description = "Day in YYYY-MM-DD form")),
    responses(
        (status = 200, description = "Mix list of the day", body = MixDayDto),
        (status = 400, description = "Malformed date", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_day(
    State(state): State<AppState>,
    session: Session,
    Path(date): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let date = parse_date(&date)?;

    let day = MixService::new(&state.db).get_day(date, user.id).await?;

    Ok((StatusCode::OK, Json(day.into_dto())))
}

/// Sign up for the mix of a day.
///
/// Players without penalties take a main roster slot while one is free; penalized
/// players and overflow land on the substitute bench.
#[utoipa::path(
    post,
    path = "/api/mix/{date}/join",
    tag = MIX_TAG,
    params(("date" = String, Path, description = "Day in YYYY-MM-DD form")),
    responses(
        (status = 200, description = "Updated mix list", body = MixDayDto),
        (status = 400, description = "Malformed or past date", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Suspended after three no-shows", body = ErrorDto),
        (status = 409, description = "Already signed up", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join(
    State(state): State<AppState>,
    session: Session,
    Path(date): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let date = parse_date(&date)?;
    let today = Utc::now().date_naive();

    let day = MixService::new(&state.db).join(user.id, date, today).await?;

    Ok((StatusCode::OK, Json(day.into_dto())))
}

/// Withdraw from the mix of a day.
///
/// When a main roster player leaves, the earliest substitute without penalties is
/// promoted.
#[utoipa::path(
    post,
    path = "/api/mix/{date}/leave",
    tag = MIX_TAG,
    params(("date" = String, Path, description = "Day in YYYY-MM-DD form")),
    responses(
        (status = 200, description = "Updated mix list", body = MixDayDto),
        (status = 400, description = "Malformed date", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Not signed up", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave(
    State(state): State<AppState>,
    session: Session,
    Path(date): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;
    let date = parse_date(&date)?;

    let day = MixService::new(&state.db).leave(user.id, date).await?;

    Ok((StatusCode::OK, Json(day.into_dto())))
}

/// Record a no-show.
///
/// Adds a penalty and drops the player's signup for the day.
///
/// # Access Control
/// - `Admin` - Only admins can record no-shows
#[utoipa::path(
    post,
    path = "/api/mix/{date}/no-show",
    tag = MIX_TAG,
    params(("date" = String, Path, description = "Day in YYYY-MM-DD form")),
    request_body = NoShowDto,
    responses(
        (status = 201, description = "Penalty recorded", body = MixPenaltyDto),
        (status = 400, description = "Malformed date", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_no_show(
    State(state): State<AppState>,
    session: Session,
    Path(date): Path<String>,
    Json(payload): Json<NoShowDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;
    let date = parse_date(&date)?;

    let penalty = MixService::new(&state.db)
        .record_no_show(admin.id, payload.user_id, date, payload.reason)
        .await?;

    Ok((StatusCode::CREATED, Json(penalty.into_dto())))
}

/// Get no-show penalties, newest first.
///
/// Admins may list every penalty or filter by user; other users only see their own.
#[utoipa::path(
    get,
    path = "/api/mix/penalties",
    tag = MIX_TAG,
    params(("userId" = Option<i32>, Query, description = "Only penalties of this user")),
    responses(
        (status = 200, description = "Penalties", body = Vec<MixPenaltyDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to view this user's penalties", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_penalties(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PenaltyQuery>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let user_id = match query.user_id {
        Some(user_id) => {
            guard.require(&[Permission::SelfOrAdmin(user_id)]).await?;
            Some(user_id)
        }
        None => {
            let user = guard.require(&[]).await?;
            (!user.is_admin).then_some(user.id)
        }
    };

    let penalties = MixService::new(&state.db).get_penalties(user_id).await?;
    let penalties_dto: Vec<MixPenaltyDto> = penalties.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(penalties_dto)))
}

/// Remove a penalty.
///
/// # Access Control
/// - `Admin` - Only admins can remove penalties
#[utoipa::path(
    delete,
    path = "/api/mix/penalties/{penalty_id}",
    tag = MIX_TAG,
    params(("penalty_id" = i32, Path, description = "Penalty ID")),
    responses(
        (status = 204, description = "Penalty removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Penalty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_penalty(
    State(state): State<AppState>,
    session: Session,
    Path(penalty_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    MixService::new(&state.db).delete_penalty(penalty_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
