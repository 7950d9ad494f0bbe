use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        ranking::{GenerateRankingDto, MonthlyRankingDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::ranking::MonthlyRanking,
        service::ranking::RankingService,
        state::AppState,
    },
};

/// Tag for grouping monthly ranking endpoints in OpenAPI documentation
pub static RANKING_TAG: &str = "ranking";

fn into_dtos(rankings: Vec<MonthlyRanking>) -> Vec<MonthlyRankingDto> {
    rankings.into_iter().map(|r| r.into_dto()).collect()
}

/// Get the ranking snapshot of a month, ordered by position.
#[utoipa::path(
    get,
    path = "/api/monthly-rankings/{month}",
    tag = RANKING_TAG,
    params(("month" = String, Path, description = "Month in YYYY-MM form")),
    responses(
        (status = 200, description = "Ranking of the month, empty when not generated", body = Vec<MonthlyRankingDto>),
        (status = 400, description = "Malformed month", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ranking(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let rankings = RankingService::new(&state.db).get_by_month(&month).await?;

    Ok((StatusCode::OK, Json(into_dtos(rankings))))
}

/// Snapshot current skill ratings as a month's ranking.
///
/// Replaces an earlier snapshot of the same month.
///
/// # Access Control
/// - `Admin` - Only admins can generate rankings
#[utoipa::path(
    post,
    path = "/api/monthly-rankings",
    tag = RANKING_TAG,
    request_body = GenerateRankingDto,
    responses(
        (status = 201, description = "Generated ranking", body = Vec<MonthlyRankingDto>),
        (status = 400, description = "Malformed month", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate_ranking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<GenerateRankingDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let rankings = RankingService::new(&state.db)
        .generate(&payload.month)
        .await?;

    Ok((StatusCode::CREATED, Json(into_dtos(rankings))))
}

/// Delete a month's ranking snapshot.
///
/// # Access Control
/// - `Admin` - Only admins can delete rankings
#[utoipa::path(
    delete,
    path = "/api/monthly-rankings/{month}",
    tag = RANKING_TAG,
    params(("month" = String, Path, description = "Month in YYYY-MM form")),
    responses(
        (status = 204, description = "Ranking deleted"),
        (status = 400, description = "Malformed month", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "No ranking for the month", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ranking(
    State(state): State<AppState>,
    session: Session,
    Path(month): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    RankingService::new(&state.db).delete_month(&month).await?;

    Ok(StatusCode::NO_CONTENT)
}
