//! Factories for mix list signups and penalties.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Signs `user_id` up for the mix on `date`.
pub async fn create_signup(
    db: &DatabaseConnection,
    user_id: i32,
    date: NaiveDate,
    is_substitute: bool,
) -> Result<entity::mix_availability::Model, DbErr> {
    entity::mix_availability::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        date: ActiveValue::Set(date),
        is_substitute: ActiveValue::Set(is_substitute),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Records a no-show penalty for `user_id` on `date`.
pub async fn create_penalty(
    db: &DatabaseConnection,
    user_id: i32,
    date: NaiveDate,
) -> Result<entity::mix_penalty::Model, DbErr> {
    entity::mix_penalty::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        date: ActiveValue::Set(date),
        reason: ActiveValue::Set("no-show".to_string()),
        created_by: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
