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
        report::{CreateReportDto, ReportDto, UpdateReportStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::report::CreateReportParam,
        service::report::ReportService,
        state::AppState,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// File a report against a player or about the portal.
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = REPORT_TAG,
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report filed", body = ReportDto),
        (status = 400, description = "Missing reason or self report", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_report(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let reporter = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let report = ReportService::new(&state.db)
        .create(CreateReportParam::from_dto(reporter.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(report.into_dto())))
}

/// Get every report, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can review reports
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "All reports", body = Vec<ReportDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reports(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let reports = ReportService::new(&state.db).get_all().await?;
    let reports_dto: Vec<ReportDto> = reports.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reports_dto)))
}

/// Set the review status of a report.
///
/// # Access Control
/// - `Admin` - Only admins can review reports
#[utoipa::path(
    put,
    path = "/api/reports/{report_id}",
    tag = REPORT_TAG,
    params(("report_id" = i32, Path, description = "Report ID")),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Report updated", body = ReportDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_report(
    State(state): State<AppState>,
    session: Session,
    Path(report_id): Path<i32>,
    Json(payload): Json<UpdateReportStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let report = ReportService::new(&state.db)
        .update_status(report_id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Delete a report.
///
/// # Access Control
/// - `Admin` - Only admins can delete reports
#[utoipa::path(
    delete,
    path = "/api/reports/{report_id}",
    tag = REPORT_TAG,
    params(("report_id" = i32, Path, description = "Report ID")),
    responses(
        (status = 204, description = "Report deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_report(
    State(state): State<AppState>,
    session: Session,
    Path(report_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ReportService::new(&state.db).delete(report_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
