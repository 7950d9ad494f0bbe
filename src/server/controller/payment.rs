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
        payment::{CreatePaymentDto, PaymentDto, UpdatePaymentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::payment::{CreatePaymentParam, UpdatePaymentParam},
        service::payment::PaymentService,
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Get payments.
///
/// Admins see every payment, other users only their own.
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "Visible payments", body = Vec<PaymentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payments(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let payments = PaymentService::new(&state.db).get_visible(&viewer).await?;
    let payments_dto: Vec<PaymentDto> = payments.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(payments_dto)))
}

/// Create a payment for a user.
///
/// # Access Control
/// - `Admin` - Only admins can create payments
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment created", body = PaymentDto),
        (status = 400, description = "Invalid amount or description", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let payment = PaymentService::new(&state.db)
        .create(CreatePaymentParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(payment.into_dto())))
}

/// Update a payment, e.g. mark it paid.
///
/// # Access Control
/// - `Admin` - Only admins can update payments
#[utoipa::path(
    put,
    path = "/api/payments/{payment_id}",
    tag = PAYMENT_TAG,
    params(("payment_id" = i32, Path, description = "Payment ID")),
    request_body = UpdatePaymentDto,
    responses(
        (status = 200, description = "Payment updated", body = PaymentDto),
        (status = 400, description = "Invalid amount or description", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_payment(
    State(state): State<AppState>,
    session: Session,
    Path(payment_id): Path<i32>,
    Json(payload): Json<UpdatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let payment = PaymentService::new(&state.db)
        .update(payment_id, UpdatePaymentParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

/// Delete a payment.
///
/// # Access Control
/// - `Admin` - Only admins can delete payments
#[utoipa::path(
    delete,
    path = "/api/payments/{payment_id}",
    tag = PAYMENT_TAG,
    params(("payment_id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 204, description = "Payment deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_payment(
    State(state): State<AppState>,
    session: Session,
    Path(payment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    PaymentService::new(&state.db).delete(payment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
