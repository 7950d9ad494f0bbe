//! Player performance betting: pricing, placing and settling bets.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        bet::BetRepository, casino::CasinoRepository, match_stats::MatchStatsRepository,
        user::UserRepository,
    },
    error::{casino::CasinoError, AppError},
    model::{
        bet::{
            bet_won, compute_odds, payout, Bet, BetStatus, BetType, CreateBetParam,
            MatchPerformance, Odds, PlayerHistory,
        },
        matches::Match,
    },
};

pub struct BetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Prices a bet on `target_user_id` from their match history.
    ///
    /// # Returns
    /// - `Ok(Odds)` - Current odds for the bet
    /// - `Err(AppError::NotFound)` - Target user does not exist
    /// - `Err(AppError::CasinoErr(MissingThreshold))` - Over bet without a valid threshold
    pub async fn odds(
        &self,
        target_user_id: i32,
        bet_type: BetType,
        threshold: Option<f64>,
    ) -> Result<Odds, AppError> {
        let threshold = validate_threshold(bet_type, threshold)?;
        self.ensure_user_exists(target_user_id).await?;

        let history = self.history(target_user_id).await?;
        Ok(Odds {
            target_user_id,
            bet_type,
            threshold,
            odds: compute_odds(&history, bet_type, threshold),
        })
    }

    /// Places a bet at the current odds and debits the stake.
    ///
    /// # Returns
    /// - `Ok(Bet)` - The pending bet
    /// - `Err(AppError::CasinoErr)` - Self bet, bad threshold or insufficient balance
    /// - `Err(AppError::BadRequest)` - Stake is not positive
    /// - `Err(AppError::NotFound)` - Target user does not exist
    pub async fn place(
        &self,
        bettor_id: i32,
        target_user_id: i32,
        bet_type: BetType,
        threshold: Option<f64>,
        amount: i64,
    ) -> Result<Bet, AppError> {
        if bettor_id == target_user_id {
            return Err(CasinoError::SelfBet.into());
        }
        if amount <= 0 {
            return Err(AppError::BadRequest(
                "Bet amount must be a positive number of chips".to_string(),
            ));
        }

        let odds = self.odds(target_user_id, bet_type, threshold).await?;

        let txn = self.db.begin().await?;
        let casino_repo = CasinoRepository::new(&txn);
        let balance = casino_repo.get_or_create(bettor_id).await?;

        if casino_repo.spend(bettor_id, amount).await?.is_none() {
            return Err(CasinoError::InsufficientBalance {
                balance: balance.balance,
                required: amount,
            }
            .into());
        }

        let bet = BetRepository::new(&txn)
            .create(CreateBetParam {
                bettor_id,
                target_user_id,
                bet_type,
                threshold: odds.threshold,
                amount,
                odds: odds.odds,
            })
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "User {} bet {} chips on {} {} at {}",
            bettor_id,
            amount,
            target_user_id,
            bet_type.as_str(),
            bet.odds
        );

        Ok(bet)
    }

    /// Bets placed by a user, newest first.
    pub async fn get_mine(&self, bettor_id: i32) -> Result<Vec<Bet>, AppError> {
        Ok(BetRepository::new(self.db).get_by_bettor(bettor_id).await?)
    }

    async fn ensure_user_exists(&self, user_id: i32) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }

    async fn history(&self, user_id: i32) -> Result<PlayerHistory, DbErr> {
        let performances: Vec<MatchPerformance> = MatchStatsRepository::new(self.db)
            .get_history_by_user(user_id)
            .await?
            .into_iter()
            .map(|(stats, game)| MatchPerformance {
                kills: stats.line.kills,
                deaths: stats.line.deaths,
                is_mvp: stats.is_mvp,
                won: game.winner_team.as_deref() == Some(stats.team.as_str()),
            })
            .collect();

        Ok(PlayerHistory::from_performances(&performances))
    }
}

/// Over bets need a finite non-negative threshold; other bet types carry none.
fn validate_threshold(bet_type: BetType, threshold: Option<f64>) -> Result<Option<f64>, CasinoError> {
    if !bet_type.needs_threshold() {
        return Ok(None);
    }

    match threshold {
        Some(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err(CasinoError::MissingThreshold(bet_type.as_str())),
    }
}

/// Settles every pending bet on a player of `game`.
///
/// A won bet credits `floor(amount × odds)` to the bettor. Runs on the caller's
/// connection so an import settles bets inside its own transaction.
///
/// # Returns
/// - `Ok(u64)` - Number of bets settled
/// - `Err(DbErr)` - Database error
pub async fn resolve_bets_for_match<C: ConnectionTrait>(
    db: &C,
    game: &Match,
    rows: &[entity::match_stats::Model],
) -> Result<u64, DbErr> {
    let target_ids: Vec<i32> = rows.iter().map(|row| row.user_id).collect();
    let bets = BetRepository::new(db).get_pending_by_targets(&target_ids).await?;

    let bet_repo = BetRepository::new(db);
    let casino_repo = CasinoRepository::new(db);
    let mut resolved = 0;

    for bet in bets {
        let Some(row) = rows.iter().find(|row| row.user_id == bet.target_user_id) else {
            continue;
        };

        let performance = MatchPerformance {
            kills: row.kills,
            deaths: row.deaths,
            is_mvp: row.is_mvp,
            won: game.winner_team.as_deref() == Some(row.team.as_str()),
        };

        let (status, amount_won) = if bet_won(bet.bet_type, bet.threshold, &performance) {
            (BetStatus::Won, payout(bet.amount, bet.odds))
        } else {
            (BetStatus::Lost, 0)
        };

        if !bet_repo.resolve(bet.id, status, game.id, amount_won).await? {
            continue;
        }

        if amount_won > 0 {
            casino_repo.get_or_create(bet.bettor_id).await?;
            casino_repo.credit(bet.bettor_id, amount_won).await?;
        }

        resolved += 1;
    }

    Ok(resolved)
}
