use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::user::UserRepository,
    model::ranking::{MonthlyRanking, RankingEntryParam},
};

pub struct RankingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RankingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Rankings of a month ordered by position, with player names attached.
    pub async fn get_by_month(&self, month: &str) -> Result<Vec<MonthlyRanking>, DbErr> {
        let rows = entity::prelude::MonthlyRanking::find()
            .filter(entity::monthly_ranking::Column::Month.eq(month))
            .order_by_asc(entity::monthly_ranking::Column::Position)
            .all(self.db)
            .await?;

        let user_ids: Vec<i32> = rows.iter().map(|row| row.user_id).collect();
        let users = UserRepository::new(self.db).find_by_ids(&user_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let name = users.get(&row.user_id).map(|user| user.name.clone());
                MonthlyRanking::from_entity(row, name)
            })
            .collect())
    }

    /// Writes a month's snapshot rows.
    pub async fn create_many(
        &self,
        month: &str,
        entries: Vec<RankingEntryParam>,
    ) -> Result<(), DbErr> {
        if entries.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let models = entries
            .into_iter()
            .map(|entry| entity::monthly_ranking::ActiveModel {
                month: ActiveValue::Set(month.to_string()),
                user_id: ActiveValue::Set(entry.user_id),
                position: ActiveValue::Set(entry.position),
                skill_rating: ActiveValue::Set(entry.skill_rating),
                matches: ActiveValue::Set(entry.matches),
                kills: ActiveValue::Set(entry.kills),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::MonthlyRanking::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Removes every row of a month.
    ///
    /// # Returns
    /// Number of rows deleted
    pub async fn delete_month(&self, month: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::MonthlyRanking::delete_many()
            .filter(entity::monthly_ranking::Column::Month.eq(month))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
