use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::report::{CreateReportDto, ReportDto, ReportStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: i32,
    pub reporter_id: i32,
    pub reported_user_id: Option<i32>,
    pub reason: String,
    pub description: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

impl Report {
    pub fn from_entity(entity: entity::report::Model) -> Result<Self, DbErr> {
        let status = ReportStatus::parse(&entity.status)
            .ok_or_else(|| DbErr::Custom(format!("Unknown report status '{}'", entity.status)))?;

        Ok(Self {
            id: entity.id,
            reporter_id: entity.reporter_id,
            reported_user_id: entity.reported_user_id,
            reason: entity.reason,
            description: entity.description,
            status,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ReportDto {
        ReportDto {
            id: self.id,
            reporter_id: self.reporter_id,
            reported_user_id: self.reported_user_id,
            reason: self.reason,
            description: self.description,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReportParam {
    pub reporter_id: i32,
    pub reported_user_id: Option<i32>,
    pub reason: String,
    pub description: String,
}

impl CreateReportParam {
    pub fn from_dto(reporter_id: i32, dto: CreateReportDto) -> Self {
        Self {
            reporter_id,
            reported_user_id: dto.reported_user_id,
            reason: dto.reason.trim().to_string(),
            description: dto.description.trim().to_string(),
        }
    }
}
