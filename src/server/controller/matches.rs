use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginationParams},
        matches::{
            DuplicateMatchDto, ImportMatchDto, ImportResultDto, MatchDetailDto,
            PaginatedMatchesDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::matches::ImportMatchParam,
        service::{import::ImportService, matches::MatchService},
        state::AppState,
    },
};

/// Tag for grouping match endpoints in OpenAPI documentation
pub static MATCH_TAG: &str = "match";

/// Get matches, newest first.
#[utoipa::path(
    get,
    path = "/api/matches",
    tag = MATCH_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("perPage" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of matches", body = PaginatedMatchesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_matches(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let matches = MatchService::new(&state.db)
        .get_paginated(params.page, params.per_page)
        .await?;

    Ok((StatusCode::OK, Json(matches.into_dto())))
}

/// Get a match with every player's stat line.
#[utoipa::path(
    get,
    path = "/api/matches/{match_id}",
    tag = MATCH_TAG,
    params(("match_id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Match with player stats", body = MatchDetailDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detail = MatchService::new(&state.db).get_detail(match_id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Import a match from a CSV stats export.
///
/// Creates the match and one stat row per player, picks the MVP, refreshes the
/// players' totals and settles pending bets on them, all in one transaction.
///
/// # Access Control
/// - `Admin` - Only admins can import matches
#[utoipa::path(
    post,
    path = "/api/matches/import",
    tag = MATCH_TAG,
    request_body = ImportMatchDto,
    responses(
        (status = 201, description = "Match imported", body = ImportResultDto),
        (status = 400, description = "Invalid CSV or no valid player rows", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Match already imported", body = DuplicateMatchDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_match(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ImportMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let outcome = ImportService::new(&state.db)
        .import(ImportMatchParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(outcome.into_dto())))
}

/// Delete a match and recompute the totals of its players.
///
/// # Access Control
/// - `Admin` - Only admins can delete matches
#[utoipa::path(
    delete,
    path = "/api/matches/{match_id}",
    tag = MATCH_TAG,
    params(("match_id" = i32, Path, description = "Match ID")),
    responses(
        (status = 204, description = "Match deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    MatchService::new(&state.db).delete(match_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Re-score a match and move the MVP flag to the top scorer.
///
/// # Access Control
/// - `Admin` - Only admins can recalculate the MVP
#[utoipa::path(
    post,
    path = "/api/matches/{match_id}/recalculate-mvp",
    tag = MATCH_TAG,
    params(("match_id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Match with the updated MVP", body = MatchDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recalculate_mvp(
    State(state): State<AppState>,
    session: Session,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let detail = MatchService::new(&state.db).recalculate_mvp(match_id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}
