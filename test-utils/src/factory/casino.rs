//! Factories for casino balances and bets.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a casino balance row for `user_id`.
pub async fn create_balance(
    db: &DatabaseConnection,
    user_id: i32,
    balance: i64,
) -> Result<entity::casino_balance::Model, DbErr> {
    entity::casino_balance::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        balance: ActiveValue::Set(balance),
        last_daily_claim: ActiveValue::Set(None),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Factory for pending bets.
///
/// Defaults to a 100 chip `mvp` bet at odds 2.0.
pub struct BetFactory<'a> {
    db: &'a DatabaseConnection,
    bettor_id: i32,
    target_user_id: i32,
    bet_type: String,
    threshold: Option<f64>,
    amount: i64,
    odds: f64,
}

impl<'a> BetFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, bettor_id: i32, target_user_id: i32) -> Self {
        Self {
            db,
            bettor_id,
            target_user_id,
            bet_type: "mvp".to_string(),
            threshold: None,
            amount: 100,
            odds: 2.0,
        }
    }

    pub fn bet_type(mut self, bet_type: impl Into<String>, threshold: Option<f64>) -> Self {
        self.bet_type = bet_type.into();
        self.threshold = threshold;
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    pub fn odds(mut self, odds: f64) -> Self {
        self.odds = odds;
        self
    }

    pub async fn build(self) -> Result<entity::bet::Model, DbErr> {
        entity::bet::ActiveModel {
            bettor_id: ActiveValue::Set(self.bettor_id),
            target_user_id: ActiveValue::Set(self.target_user_id),
            bet_type: ActiveValue::Set(self.bet_type),
            threshold: ActiveValue::Set(self.threshold),
            amount: ActiveValue::Set(self.amount),
            odds: ActiveValue::Set(self.odds),
            status: ActiveValue::Set("pending".to_string()),
            match_id: ActiveValue::Set(None),
            payout: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            resolved_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
