use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{match_stats::MatchStatsRepository, matches::MatchRepository, user::UserRepository},
    error::AppError,
    model::{
        matches::{Match, MatchDetail, PaginatedMatches},
        stats::{select_mvp, StatLine},
    },
};

pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets matches newest first, one page at a time.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedMatches, AppError> {
        let per_page = per_page.clamp(1, 100);
        Ok(MatchRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?)
    }

    /// Gets a match with the stat line of every player.
    pub async fn get_detail(&self, match_id: i32) -> Result<MatchDetail, AppError> {
        let game = self.find(match_id).await?;
        let players = MatchStatsRepository::new(self.db)
            .get_by_match(match_id)
            .await?;

        Ok(MatchDetail { game, players })
    }

    /// Deletes a match and recomputes the totals of everyone who played in it.
    pub async fn delete(&self, match_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let user_ids = MatchStatsRepository::new(&txn)
            .get_user_ids_by_match(match_id)
            .await?;

        if !MatchRepository::new(&txn).delete(match_id).await? {
            return Err(AppError::NotFound(format!("Match {} not found", match_id)));
        }

        let user_repo = UserRepository::new(&txn);
        for user_id in &user_ids {
            user_repo.recalculate_user_stats(*user_id).await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Deleted match {} and recalculated {} players",
            match_id,
            user_ids.len()
        );

        Ok(())
    }

    /// Re-scores every stat line of a match and moves the MVP flag to the top score.
    pub async fn recalculate_mvp(&self, match_id: i32) -> Result<MatchDetail, AppError> {
        self.find(match_id).await?;

        let txn = self.db.begin().await?;
        let stats_repo = MatchStatsRepository::new(&txn);

        let rows = stats_repo.get_rows_by_match(match_id).await?;
        let lines: Vec<StatLine> = rows.iter().map(StatLine::from_entity).collect();
        let mvp_stats_id = select_mvp(&lines)
            .and_then(|index| rows.get(index))
            .map(|row| row.id);

        stats_repo.set_mvp(match_id, mvp_stats_id).await?;

        let user_repo = UserRepository::new(&txn);
        for row in &rows {
            user_repo.recalculate_user_stats(row.user_id).await?;
        }

        txn.commit().await?;

        self.get_detail(match_id).await
    }

    async fn find(&self, match_id: i32) -> Result<Match, AppError> {
        MatchRepository::new(self.db)
            .find_by_id(match_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Match {} not found", match_id)))
    }
}
