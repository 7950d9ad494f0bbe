use sea_orm::DatabaseConnection;

use crate::{
    model::report::ReportStatus,
    server::{
        data::report::ReportRepository,
        error::AppError,
        model::report::{CreateReportParam, Report},
    },
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a report. Reporting yourself is rejected.
    pub async fn create(&self, param: CreateReportParam) -> Result<Report, AppError> {
        if param.reason.is_empty() {
            return Err(AppError::BadRequest("Reason is required".to_string()));
        }
        if param.reported_user_id == Some(param.reporter_id) {
            return Err(AppError::BadRequest("You cannot report yourself".to_string()));
        }

        let report = ReportRepository::new(self.db).create(param).await?;
        tracing::info!("User {} filed report {}", report.reporter_id, report.id);

        Ok(report)
    }

    pub async fn get_all(&self) -> Result<Vec<Report>, AppError> {
        Ok(ReportRepository::new(self.db).get_all().await?)
    }

    pub async fn update_status(
        &self,
        report_id: i32,
        status: ReportStatus,
    ) -> Result<Report, AppError> {
        ReportRepository::new(self.db)
            .update_status(report_id, status)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", report_id)))
    }

    pub async fn delete(&self, report_id: i32) -> Result<(), AppError> {
        if !ReportRepository::new(self.db).delete(report_id).await? {
            return Err(AppError::NotFound(format!("Report {} not found", report_id)));
        }

        Ok(())
    }
}
