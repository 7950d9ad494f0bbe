//! Chip balances, daily bonus, slot machine and cases.
//!
//! Every game takes its randomness from an injected `rand::Rng`. The stake is
//! debited and the payout credited in one transaction.

use chrono::{NaiveDate, Utc};
use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::casino::CasinoRepository,
    error::{casino::CasinoError, AppError},
    model::casino::{
        slot_multiplier, spin, Balance, CaseKind, CaseOutcome, Rarity, SpinOutcome, DAILY_BONUS,
        MAX_SLOT_BET, MIN_SLOT_BET,
    },
};

pub struct CasinoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CasinoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Current UTC day, the unit of the daily bonus.
    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Returns the user's balance, creating it on first access.
    pub async fn get_balance(&self, user_id: i32) -> Result<Balance, AppError> {
        Ok(CasinoRepository::new(self.db).get_or_create(user_id).await?)
    }

    /// Credits the daily bonus once per UTC day.
    ///
    /// # Returns
    /// - `Ok(Balance)` - Balance after the bonus
    /// - `Err(AppError::CasinoErr(DailyAlreadyClaimed))` - Already claimed on `today`
    pub async fn claim_daily(&self, user_id: i32, today: NaiveDate) -> Result<Balance, AppError> {
        let repo = CasinoRepository::new(self.db);
        repo.get_or_create(user_id).await?;

        let balance = repo
            .claim_daily(user_id, today, DAILY_BONUS)
            .await?
            .ok_or(CasinoError::DailyAlreadyClaimed)?;

        tracing::debug!("User {} claimed the daily bonus", user_id);

        Ok(balance)
    }

    /// Spins the slot machine for `bet` chips.
    ///
    /// # Returns
    /// - `Ok(SpinOutcome)` - Reels, payout and resulting balance
    /// - `Err(AppError::CasinoErr(InvalidBet))` - Bet outside `MIN_SLOT_BET..=MAX_SLOT_BET`
    /// - `Err(AppError::CasinoErr(InsufficientBalance))` - Balance below the bet
    pub async fn spin<R: Rng + Send>(
        &self,
        user_id: i32,
        bet: i64,
        rng: &mut R,
    ) -> Result<SpinOutcome, AppError> {
        if !(MIN_SLOT_BET..=MAX_SLOT_BET).contains(&bet) {
            return Err(CasinoError::InvalidBet {
                min: MIN_SLOT_BET,
                max: MAX_SLOT_BET,
            }
            .into());
        }

        let reels = spin(rng);
        let multiplier = slot_multiplier(&reels);
        let payout = bet * multiplier;

        let balance = self.settle(user_id, bet, payout).await?;

        Ok(SpinOutcome {
            reels,
            multiplier,
            payout,
            balance,
        })
    }

    /// Opens a case of the given kind.
    ///
    /// # Returns
    /// - `Ok(CaseOutcome)` - Drawn rarity, reward and resulting balance
    /// - `Err(AppError::CasinoErr(InsufficientBalance))` - Balance below the case cost
    pub async fn open_case<R: Rng + Send>(
        &self,
        user_id: i32,
        case: CaseKind,
        rng: &mut R,
    ) -> Result<CaseOutcome, AppError> {
        let rarity = Rarity::draw(rng);
        let cost = case.cost();
        let reward = rarity.reward(case);

        let balance = self.settle(user_id, cost, reward).await?;

        Ok(CaseOutcome {
            case,
            rarity,
            cost,
            reward,
            balance,
        })
    }

    /// Debits `stake` and credits `payout` atomically, returning the final balance.
    async fn settle(&self, user_id: i32, stake: i64, payout: i64) -> Result<i64, AppError> {
        let txn = self.db.begin().await?;
        let repo = CasinoRepository::new(&txn);
        let current = repo.get_or_create(user_id).await?;

        let Some(mut balance) = repo.spend(user_id, stake).await? else {
            return Err(CasinoError::InsufficientBalance {
                balance: current.balance,
                required: stake,
            }
            .into());
        };

        if payout > 0 {
            balance = repo.credit(user_id, payout).await?;
        }

        txn.commit().await?;

        Ok(balance)
    }
}
