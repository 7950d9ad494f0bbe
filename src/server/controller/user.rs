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
        user::{PaginatedUsersDto, RecalculatedDto, UpdateUserDto, UserDto, UserMatchDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::UpdateUserParam,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the player leaderboard.
///
/// Users ordered by skill rating, highest first.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("perPage" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db)
        .get_paginated(params.page, params.per_page)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User profile with cumulative stats", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get a user's match history, newest first.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/matches",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Matches with the user's stat line", body = Vec<UserMatchDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_matches(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let matches = UserService::new(&state.db).get_matches(user_id).await?;
    let matches_dto: Vec<UserMatchDto> = matches.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(matches_dto)))
}

/// Update a profile.
///
/// # Access Control
/// - `SelfOrAdmin` - Users edit their own name and avatar; only admins may change
///   the admin flag or edit other users
#[utoipa::path(
    patch,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to edit this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrAdmin(user_id)])
        .await?;

    let user = UserService::new(&state.db)
        .update(&actor, user_id, UpdateUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user together with their stats, signups and bets.
///
/// # Access Control
/// - `Admin` - Only admins can delete users
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Recompute totals and skill rating of every user from their match rows.
///
/// # Access Control
/// - `Admin` - Only admins can trigger a recalculation
#[utoipa::path(
    post,
    path = "/api/users/recalculate",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Number of users recalculated", body = RecalculatedDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recalculate_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users_recalculated = UserService::new(&state.db).recalculate_all().await?;

    Ok((StatusCode::OK, Json(RecalculatedDto { users_recalculated })))
}
