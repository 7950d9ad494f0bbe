//! Per-player match stat rows.

use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::user::UserRepository,
    model::matches::{CreateMatchStatsParam, Match, MatchStats},
};

pub struct MatchStatsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchStatsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one stat row per player of a match.
    pub async fn create_many(
        &self,
        match_id: i32,
        params: Vec<CreateMatchStatsParam>,
    ) -> Result<(), DbErr> {
        if params.is_empty() {
            return Ok(());
        }

        let models = params.into_iter().map(|param| {
            let line = param.line;
            entity::match_stats::ActiveModel {
                match_id: ActiveValue::Set(match_id),
                user_id: ActiveValue::Set(param.user_id),
                team: ActiveValue::Set(param.team),
                kills: ActiveValue::Set(line.kills),
                deaths: ActiveValue::Set(line.deaths),
                assists: ActiveValue::Set(line.assists),
                headshots: ActiveValue::Set(line.headshots),
                damage: ActiveValue::Set(line.damage),
                enemy5ks: ActiveValue::Set(line.enemy5ks),
                enemy4ks: ActiveValue::Set(line.enemy4ks),
                enemy3ks: ActiveValue::Set(line.enemy3ks),
                enemy2ks: ActiveValue::Set(line.enemy2ks),
                utility_count: ActiveValue::Set(line.utility_count),
                utility_damage: ActiveValue::Set(line.utility_damage),
                utility_successes: ActiveValue::Set(line.utility_successes),
                utility_enemies: ActiveValue::Set(line.utility_enemies),
                flash_count: ActiveValue::Set(line.flash_count),
                flash_successes: ActiveValue::Set(line.flash_successes),
                enemies_flashed: ActiveValue::Set(line.enemies_flashed),
                v1_count: ActiveValue::Set(line.v1_count),
                v1_wins: ActiveValue::Set(line.v1_wins),
                v2_count: ActiveValue::Set(line.v2_count),
                v2_wins: ActiveValue::Set(line.v2_wins),
                entry_count: ActiveValue::Set(line.entry_count),
                entry_wins: ActiveValue::Set(line.entry_wins),
                shots_fired: ActiveValue::Set(line.shots_fired),
                shots_on_target: ActiveValue::Set(line.shots_on_target),
                is_mvp: ActiveValue::Set(param.is_mvp),
                ..Default::default()
            }
        });

        entity::prelude::MatchStats::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Raw stat rows of a match in insertion order.
    pub async fn get_rows_by_match(
        &self,
        match_id: i32,
    ) -> Result<Vec<entity::match_stats::Model>, DbErr> {
        entity::prelude::MatchStats::find()
            .filter(entity::match_stats::Column::MatchId.eq(match_id))
            .order_by_asc(entity::match_stats::Column::Id)
            .all(self.db)
            .await
    }

    /// Stat lines of a match with player names attached.
    pub async fn get_by_match(&self, match_id: i32) -> Result<Vec<MatchStats>, DbErr> {
        let rows = self.get_rows_by_match(match_id).await?;

        let user_ids: Vec<i32> = rows.iter().map(|row| row.user_id).collect();
        let users = UserRepository::new(self.db).find_by_ids(&user_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let name = users.get(&row.user_id).map(|user| user.name.clone());
                MatchStats::from_entity(row, name)
            })
            .collect())
    }

    /// Ids of every user with a stat row in the match.
    pub async fn get_user_ids_by_match(&self, match_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = self.get_rows_by_match(match_id).await?;
        Ok(rows.into_iter().map(|row| row.user_id).collect())
    }

    /// A user's stat rows paired with their matches, newest match first.
    pub async fn get_history_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(MatchStats, Match)>, DbErr> {
        let rows = entity::prelude::MatchStats::find()
            .filter(entity::match_stats::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Match)
            .order_by_desc(entity::match_stats::Column::MatchId)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(stats, game)| {
                let game = Match::from_entity(game?);
                Some((MatchStats::from_entity(stats, None), game))
            })
            .collect())
    }

    /// Flags exactly `mvp_stats_id` as MVP of the match, or nobody when `None`.
    pub async fn set_mvp(&self, match_id: i32, mvp_stats_id: Option<i32>) -> Result<(), DbErr> {
        entity::prelude::MatchStats::update_many()
            .col_expr(entity::match_stats::Column::IsMvp, Expr::value(false))
            .filter(entity::match_stats::Column::MatchId.eq(match_id))
            .exec(self.db)
            .await?;

        if let Some(stats_id) = mvp_stats_id {
            entity::prelude::MatchStats::update_many()
                .col_expr(entity::match_stats::Column::IsMvp, Expr::value(true))
                .filter(entity::match_stats::Column::Id.eq(stats_id))
                .filter(entity::match_stats::Column::MatchId.eq(match_id))
                .exec(self.db)
                .await?;
        }

        Ok(())
    }
}
