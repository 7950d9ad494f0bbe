//! Mix signups and no-show penalties.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::user::UserRepository,
    model::mix::{CreatePenaltyParam, MixPenalty, MixSignup},
};

pub struct MixRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MixRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Every signup for `date` in join order, with player profiles attached.
    pub async fn get_signups_by_date(&self, date: NaiveDate) -> Result<Vec<MixSignup>, DbErr> {
        let rows = entity::prelude::MixAvailability::find()
            .filter(entity::mix_availability::Column::Date.eq(date))
            .order_by_asc(entity::mix_availability::Column::CreatedAt)
            .order_by_asc(entity::mix_availability::Column::Id)
            .all(self.db)
            .await?;

        let user_ids: Vec<i32> = rows.iter().map(|row| row.user_id).collect();
        let mut users = UserRepository::new(self.db).find_by_ids(&user_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let user = users.remove(&row.user_id);
                MixSignup::from_entity(row, user)
            })
            .collect())
    }

    pub async fn find_signup(
        &self,
        user_id: i32,
        date: NaiveDate,
    ) -> Result<Option<entity::mix_availability::Model>, DbErr> {
        entity::prelude::MixAvailability::find()
            .filter(entity::mix_availability::Column::UserId.eq(user_id))
            .filter(entity::mix_availability::Column::Date.eq(date))
            .one(self.db)
            .await
    }

    /// Adds a signup. The `(user_id, date)` unique index rejects a second one.
    pub async fn create_signup(
        &self,
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
        .insert(self.db)
        .await
    }

    pub async fn delete_signup(&self, signup_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MixAvailability::delete_by_id(signup_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn set_substitute(&self, signup_id: i32, is_substitute: bool) -> Result<(), DbErr> {
        entity::mix_availability::ActiveModel {
            id: ActiveValue::Unchanged(signup_id),
            is_substitute: ActiveValue::Set(is_substitute),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    pub async fn count_penalties(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::MixPenalty::find()
            .filter(entity::mix_penalty::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Penalty counts keyed by user. Users without penalties are absent.
    pub async fn penalty_counts(&self, user_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let penalties = entity::prelude::MixPenalty::find()
            .filter(entity::mix_penalty::Column::UserId.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await?;

        let mut counts = HashMap::new();
        for penalty in penalties {
            *counts.entry(penalty.user_id).or_insert(0) += 1;
        }

        Ok(counts)
    }

    pub async fn create_penalty(&self, param: CreatePenaltyParam) -> Result<MixPenalty, DbErr> {
        let entity = entity::mix_penalty::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            date: ActiveValue::Set(param.date),
            reason: ActiveValue::Set(param.reason),
            created_by: ActiveValue::Set(param.created_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MixPenalty::from_entity(entity))
    }

    /// Penalties newest first, optionally restricted to one user.
    pub async fn get_penalties(&self, user_id: Option<i32>) -> Result<Vec<MixPenalty>, DbErr> {
        let mut query = entity::prelude::MixPenalty::find();
        if let Some(user_id) = user_id {
            query = query.filter(entity::mix_penalty::Column::UserId.eq(user_id));
        }

        let penalties = query
            .order_by_desc(entity::mix_penalty::Column::CreatedAt)
            .order_by_desc(entity::mix_penalty::Column::Id)
            .all(self.db)
            .await?;

        Ok(penalties.into_iter().map(MixPenalty::from_entity).collect())
    }

    pub async fn delete_penalty(&self, penalty_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MixPenalty::delete_by_id(penalty_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
