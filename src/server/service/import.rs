//! Match CSV import pipeline.
//!
//! Parses the CSV, plans the match, then writes the match, its stat rows, the
//! refreshed player totals and the settled bets in a single transaction.

pub mod csv;
pub mod plan;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        is_unique_violation, match_stats::MatchStatsRepository, matches::MatchRepository,
        user::UserRepository,
    },
    error::{import::ImportError, AppError},
    model::matches::{CreateMatchParam, CreateMatchStatsParam, ImportMatchParam, ImportOutcome},
    service::bet::resolve_bets_for_match,
};

use self::plan::ResultOverride;

pub struct ImportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Imports one match from a CSV export.
    ///
    /// # Returns
    /// - `Ok(ImportOutcome)` - Created match with import counters
    /// - `Err(AppError::ImportErr(NoValidRows))` - Every row was skipped
    /// - `Err(AppError::ImportErr(Duplicate))` - The `(matchid, mapnumber)` pair exists
    /// - `Err(AppError::ImportErr(InvalidCsv | InvalidRequest))` - Unusable input
    /// - `Err(AppError::DbErr)` - Database error, nothing was written
    pub async fn import(&self, param: ImportMatchParam) -> Result<ImportOutcome, AppError> {
        if param.map.is_empty() {
            return Err(ImportError::InvalidRequest("Map name is required".to_string()).into());
        }

        let parsed = csv::parse(&param.csv_content)?;
        let result = ResultOverride {
            winner_team: param.winner_team,
            team1_score: param.team1_score,
            team2_score: param.team2_score,
        };
        let Some(plan) = plan::plan(parsed.rows, &result) else {
            return Err(ImportError::NoValidRows {
                skipped: parsed.skipped,
            }
            .into());
        };
        let skipped_rows = parsed.skipped + plan.skipped;

        if !plan.winner_is_a_team() {
            return Err(ImportError::InvalidRequest(format!(
                "Winner '{}' is neither '{}' nor '{}'",
                plan.winner_team.as_deref().unwrap_or_default(),
                plan.team1_name,
                plan.team2_name
            ))
            .into());
        }

        if let Some(existing) = MatchRepository::new(self.db)
            .find_by_identity(&plan.external_match_id, plan.map_number)
            .await?
        {
            return Err(ImportError::Duplicate(Box::new(existing)).into());
        }

        let txn = self.db.begin().await?;

        let game = match MatchRepository::new(&txn)
            .create(CreateMatchParam {
                external_match_id: plan.external_match_id.clone(),
                map_number: plan.map_number,
                map: param.map,
                team1_name: plan.team1_name.clone(),
                team2_name: plan.team2_name.clone(),
                team1_score: plan.team1_score,
                team2_score: plan.team2_score,
                winner_team: plan.winner_team.clone(),
            })
            .await
        {
            Ok(game) => game,
            Err(err) if is_unique_violation(&err) => {
                txn.rollback().await?;
                return Err(self.duplicate(&plan.external_match_id, plan.map_number).await);
            }
            Err(err) => return Err(err.into()),
        };

        let user_repo = UserRepository::new(&txn);
        let mut stats = Vec::with_capacity(plan.rows.len());
        let mut mvp_user_id = None;
        for (index, row) in plan.rows.into_iter().enumerate() {
            let user = user_repo
                .find_or_create_by_steam_id(&row.steam_id, &row.name)
                .await?;
            let is_mvp = plan.mvp_index == Some(index);
            if is_mvp {
                mvp_user_id = Some(user.id);
            }

            stats.push(CreateMatchStatsParam {
                user_id: user.id,
                team: row.team,
                line: row.line,
                is_mvp,
            });
        }

        let user_ids: Vec<i32> = stats.iter().map(|param| param.user_id).collect();
        let players_imported = stats.len() as u64;

        let stats_repo = MatchStatsRepository::new(&txn);
        stats_repo.create_many(game.id, stats).await?;

        for user_id in &user_ids {
            user_repo.recalculate_user_stats(*user_id).await?;
        }

        let rows = stats_repo.get_rows_by_match(game.id).await?;
        let bets_resolved = resolve_bets_for_match(&txn, &game, &rows).await?;

        txn.commit().await?;

        tracing::info!(
            "Imported match {} map {} ({} players, {} skipped rows, {} bets resolved)",
            game.external_match_id,
            game.map_number,
            players_imported,
            skipped_rows,
            bets_resolved
        );

        Ok(ImportOutcome {
            game,
            players_imported,
            skipped_rows,
            mvp_user_id,
            bets_resolved,
        })
    }

    /// Builds the conflict error for a match inserted concurrently.
    async fn duplicate(&self, external_match_id: &str, map_number: i32) -> AppError {
        match MatchRepository::new(self.db)
            .find_by_identity(external_match_id, map_number)
            .await
        {
            Ok(Some(existing)) => ImportError::Duplicate(Box::new(existing)).into(),
            Ok(None) => AppError::Conflict("Match has already been imported".to_string()),
            Err(err) => err.into(),
        }
    }
}
