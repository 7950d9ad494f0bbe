use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{ranking::RankingRepository, user::UserRepository},
    error::AppError,
    model::ranking::{rank_users, MonthlyRanking},
    util::parse::parse_month,
};

pub struct RankingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RankingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_month(&self, month: &str) -> Result<Vec<MonthlyRanking>, AppError> {
        let month = parse_month(month)?;
        Ok(RankingRepository::new(self.db).get_by_month(&month).await?)
    }

    /// Snapshots current skill ratings as the ranking of `month`.
    ///
    /// Replaces any earlier snapshot of the same month. Only players with at least one
    /// match are ranked.
    pub async fn generate(&self, month: &str) -> Result<Vec<MonthlyRanking>, AppError> {
        let month = parse_month(month)?;

        let txn = self.db.begin().await?;
        let users = UserRepository::new(&txn).get_all_by_rating().await?;
        let entries = rank_users(&users);
        let ranked = entries.len();

        let repo = RankingRepository::new(&txn);
        repo.delete_month(&month).await?;
        repo.create_many(&month, entries).await?;

        txn.commit().await?;

        tracing::info!("Generated ranking for {} with {} players", month, ranked);

        Ok(RankingRepository::new(self.db).get_by_month(&month).await?)
    }

    /// Deletes a month's snapshot.
    ///
    /// # Returns
    /// - `Ok(())` - Snapshot deleted
    /// - `Err(AppError::NotFound)` - No ranking exists for the month
    pub async fn delete_month(&self, month: &str) -> Result<(), AppError> {
        let month = parse_month(month)?;

        if RankingRepository::new(self.db).delete_month(&month).await? == 0 {
            return Err(AppError::NotFound(format!("No ranking for {}", month)));
        }

        Ok(())
    }
}
