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
        championship::{CreateRegistrationDto, RegistrationDto, UpdateRegistrationStatusDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::championship::CreateRegistrationParam,
        service::championship::ChampionshipService,
        state::AppState,
    },
};

/// Tag for grouping championship endpoints in OpenAPI documentation
pub static CHAMPIONSHIP_TAG: &str = "championship";

#[utoipa::path(
    get,
    path = "/api/championship-registrations",
    tag = CHAMPIONSHIP_TAG,
    responses(
        (status = 200, description = "All registrations", body = Vec<RegistrationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_registrations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let registrations = ChampionshipService::new(&state.db).get_all().await?;
    let registrations_dto: Vec<RegistrationDto> =
        registrations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(registrations_dto)))
}

/// Register the logged in user for the championship.
#[utoipa::path(
    post,
    path = "/api/championship-registrations",
    tag = CHAMPIONSHIP_TAG,
    request_body = CreateRegistrationDto,
    responses(
        (status = 201, description = "Registration created", body = RegistrationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRegistrationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let registration = ChampionshipService::new(&state.db)
        .register(CreateRegistrationParam::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(registration.into_dto())))
}

/// Approve or reject a registration.
///
/// # Access Control
/// - `Admin` - Only admins can review registrations
#[utoipa::path(
    put,
    path = "/api/championship-registrations/{registration_id}",
    tag = CHAMPIONSHIP_TAG,
    params(("registration_id" = i32, Path, description = "Registration ID")),
    request_body = UpdateRegistrationStatusDto,
    responses(
        (status = 200, description = "Registration updated", body = RegistrationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Registration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_registration(
    State(state): State<AppState>,
    session: Session,
    Path(registration_id): Path<i32>,
    Json(payload): Json<UpdateRegistrationStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let registration = ChampionshipService::new(&state.db)
        .update_status(registration_id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(registration.into_dto())))
}

/// Withdraw a registration.
///
/// # Access Control
/// - `SelfOrAdmin` - The registered user or an admin
#[utoipa::path(
    delete,
    path = "/api/championship-registrations/{registration_id}",
    tag = CHAMPIONSHIP_TAG,
    params(("registration_id" = i32, Path, description = "Registration ID")),
    responses(
        (status = 204, description = "Registration withdrawn"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Registration belongs to another user", body = ErrorDto),
        (status = 404, description = "Registration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn withdraw(
    State(state): State<AppState>,
    session: Session,
    Path(registration_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ChampionshipService::new(&state.db);
    let registration = service.get_by_id(registration_id).await?;
    if registration.user_id != user.id && !user.is_admin {
        return Err(AuthError::AccessDenied(
            user.id,
            format!("User attempted to withdraw registration {}", registration_id),
        )
        .into());
    }

    service.withdraw(registration_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
