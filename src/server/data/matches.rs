use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::page_count,
    model::matches::{CreateMatchParam, Match, PaginatedMatches},
};

pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a match row.
    ///
    /// Fails with a unique constraint violation when the
    /// `(external_match_id, map_number)` pair was already imported.
    pub async fn create(&self, param: CreateMatchParam) -> Result<Match, DbErr> {
        let entity = entity::matches::ActiveModel {
            external_match_id: ActiveValue::Set(param.external_match_id),
            map_number: ActiveValue::Set(param.map_number),
            map: ActiveValue::Set(param.map),
            team1_name: ActiveValue::Set(param.team1_name),
            team2_name: ActiveValue::Set(param.team2_name),
            team1_score: ActiveValue::Set(param.team1_score),
            team2_score: ActiveValue::Set(param.team2_score),
            winner_team: ActiveValue::Set(param.winner_team),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Match::from_entity(entity))
    }

    pub async fn find_by_id(&self, match_id: i32) -> Result<Option<Match>, DbErr> {
        let entity = entity::prelude::Match::find_by_id(match_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Match::from_entity))
    }

    /// Finds a match by its import identity.
    pub async fn find_by_identity(
        &self,
        external_match_id: &str,
        map_number: i32,
    ) -> Result<Option<Match>, DbErr> {
        let entity = entity::prelude::Match::find()
            .filter(entity::matches::Column::ExternalMatchId.eq(external_match_id))
            .filter(entity::matches::Column::MapNumber.eq(map_number))
            .one(self.db)
            .await?;

        Ok(entity.map(Match::from_entity))
    }

    /// Gets matches with pagination, newest first.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedMatches, DbErr> {
        let paginator = entity::prelude::Match::find()
            .order_by_desc(entity::matches::Column::CreatedAt)
            .order_by_desc(entity::matches::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let matches = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Match::from_entity)
            .collect();

        Ok(PaginatedMatches {
            matches,
            total,
            page,
            per_page,
            total_pages: page_count(total, per_page),
        })
    }

    /// Deletes a match. Its stat rows cascade, bets keep their history with a null match.
    pub async fn delete(&self, match_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Match::delete_by_id(match_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
