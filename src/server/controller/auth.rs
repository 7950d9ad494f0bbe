use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession, LoginFlowSession},
        },
        service::{admin::code::random_token, auth::AuthService},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

const CSRF_TOKEN_LENGTH: usize = 32;

#[derive(Deserialize, IntoParams)]
pub struct LoginParams {
    /// One-time admin code from the startup log.
    pub code: Option<String>,
}

/// Start the Steam login.
///
/// Stores a CSRF token in the session and redirects to Steam. When a valid admin
/// code is given, the account completing the login becomes admin.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    params(LoginParams),
    responses(
        (status = 307, description = "Redirect to the Steam login page"),
        (status = 400, description = "Invalid or expired admin code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LoginParams>,
) -> Result<impl IntoResponse, AppError> {
    let set_admin = match params.code.as_deref() {
        Some(code) => {
            if !state.admin_code_service.validate_and_consume(code).await {
                return Err(AppError::BadRequest(
                    "Invalid or expired admin code".to_string(),
                ));
            }
            true
        }
        None => false,
    };

    let csrf_token = random_token(CSRF_TOKEN_LENGTH);
    let url = AuthService::new(
        &state.db,
        &state.http_client,
        &state.app_url,
        state.steam_api_key.as_deref(),
    )
    .login_url(&csrf_token)?;

    CsrfSession::new(&session).set_token(csrf_token).await?;
    LoginFlowSession::new(&session)
        .set_admin_flag(set_admin)
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete the Steam login.
///
/// Validates the CSRF state, verifies the OpenID assertion with Steam and stores the
/// user in the session.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged in, redirect to the portal"),
        (status = 400, description = "CSRF mismatch or Steam rejected the assertion", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let returned_state = params
        .get("state")
        .ok_or(AuthError::CsrfValidationFailed)?;
    let stored_state = CsrfSession::new(&session).take_token().await?;
    if stored_state.as_deref() != Some(returned_state.as_str()) {
        return Err(AuthError::CsrfValidationFailed.into());
    }

    let set_admin = LoginFlowSession::new(&session).take_admin_flag().await?;

    let user = AuthService::new(
        &state.db,
        &state.http_client,
        &state.app_url,
        state.steam_api_key.as_deref(),
    )
    .callback(&params, returned_state, set_admin)
    .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Redirect::temporary(&format!("{}/", state.app_url)))
}

/// Log out and clear the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged in user.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged in user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
