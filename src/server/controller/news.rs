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
        news::{CreateNewsDto, NewsDto, UpdateNewsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::news::{CreateNewsParam, UpdateNewsParam},
        service::news::NewsService,
        state::AppState,
    },
};

/// Tag for grouping news endpoints in OpenAPI documentation
pub static NEWS_TAG: &str = "news";

/// Get all news posts, newest first, with markdown rendered to HTML.
#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    responses(
        (status = 200, description = "All news posts", body = Vec<NewsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let news = NewsService::new(&state.db).get_all().await?;
    let news_dto: Vec<NewsDto> = news.into_iter().map(|n| n.into_dto()).collect();

    Ok((StatusCode::OK, Json(news_dto)))
}

#[utoipa::path(
    get,
    path = "/api/news/{news_id}",
    tag = NEWS_TAG,
    params(("news_id" = i32, Path, description = "News post ID")),
    responses(
        (status = 200, description = "News post", body = NewsDto),
        (status = 404, description = "News post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news_post(
    State(state): State<AppState>,
    Path(news_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let news = NewsService::new(&state.db).get_by_id(news_id).await?;

    Ok((StatusCode::OK, Json(news.into_dto())))
}

/// Publish a news post authored by the logged in admin.
///
/// # Access Control
/// - `Admin` - Only admins can publish news
#[utoipa::path(
    post,
    path = "/api/news",
    tag = NEWS_TAG,
    request_body = CreateNewsDto,
    responses(
        (status = 201, description = "News post created", body = NewsDto),
        (status = 400, description = "Empty title", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_news(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    let author = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let news = NewsService::new(&state.db)
        .create(CreateNewsParam::from_dto(author.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(news.into_dto())))
}

/// Edit a news post.
///
/// # Access Control
/// - `Admin` - Only admins can edit news
#[utoipa::path(
    put,
    path = "/api/news/{news_id}",
    tag = NEWS_TAG,
    params(("news_id" = i32, Path, description = "News post ID")),
    request_body = UpdateNewsDto,
    responses(
        (status = 200, description = "News post updated", body = NewsDto),
        (status = 400, description = "Empty title", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "News post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_news(
    State(state): State<AppState>,
    session: Session,
    Path(news_id): Path<i32>,
    Json(payload): Json<UpdateNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let news = NewsService::new(&state.db)
        .update(news_id, UpdateNewsParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(news.into_dto())))
}

/// Delete a news post.
///
/// # Access Control
/// - `Admin` - Only admins can delete news
#[utoipa::path(
    delete,
    path = "/api/news/{news_id}",
    tag = NEWS_TAG,
    params(("news_id" = i32, Path, description = "News post ID")),
    responses(
        (status = 204, description = "News post deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "News post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_news(
    State(state): State<AppState>,
    session: Session,
    Path(news_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    NewsService::new(&state.db).delete(news_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
