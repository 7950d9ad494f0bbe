use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::{
    model::report::ReportStatus,
    server::model::report::{CreateReportParam, Report},
};

pub struct ReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateReportParam) -> Result<Report, DbErr> {
        let entity = entity::report::ActiveModel {
            reporter_id: ActiveValue::Set(param.reporter_id),
            reported_user_id: ActiveValue::Set(param.reported_user_id),
            reason: ActiveValue::Set(param.reason),
            description: ActiveValue::Set(param.description),
            status: ActiveValue::Set(ReportStatus::Open.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Report::from_entity(entity)
    }

    /// All reports, newest first.
    pub async fn get_all(&self) -> Result<Vec<Report>, DbErr> {
        entity::prelude::Report::find()
            .order_by_desc(entity::report::Column::CreatedAt)
            .order_by_desc(entity::report::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Report::from_entity)
            .collect()
    }

    pub async fn update_status(
        &self,
        report_id: i32,
        status: ReportStatus,
    ) -> Result<Option<Report>, DbErr> {
        let Some(existing) = entity::prelude::Report::find_by_id(report_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::report::ActiveModel = existing.into();
        active.status = ActiveValue::Set(status.as_str().to_string());

        let updated = active.update(self.db).await?;
        Report::from_entity(updated).map(Some)
    }

    pub async fn delete(&self, report_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Report::delete_by_id(report_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
