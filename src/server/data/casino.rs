//! Chip balances.
//!
//! Balance changes are single conditional `UPDATE`s, so two concurrent spends can
//! never take the balance below zero and the daily bonus is credited at most once.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    prelude::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr,
    EntityTrait, ExprTrait, QueryFilter,
};

use crate::server::{
    data::is_unique_violation,
    model::casino::{Balance, STARTING_BALANCE},
};

pub struct CasinoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CasinoRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find(&self, user_id: i32) -> Result<Option<Balance>, DbErr> {
        let entity = entity::prelude::CasinoBalance::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Balance::from_entity))
    }

    /// Returns the user's balance, creating it with the starting chips on first use.
    pub async fn get_or_create(&self, user_id: i32) -> Result<Balance, DbErr> {
        if let Some(balance) = self.find(user_id).await? {
            return Ok(balance);
        }

        let inserted = entity::casino_balance::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            balance: ActiveValue::Set(STARTING_BALANCE),
            last_daily_claim: ActiveValue::Set(None),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await;

        match inserted {
            Ok(entity) => Ok(Balance::from_entity(entity)),
            // Created by a concurrent request in the meantime
            Err(err) if is_unique_violation(&err) => self
                .find(user_id)
                .await?
                .ok_or_else(|| DbErr::RecordNotFound(format!("casino balance {}", user_id))),
            Err(err) => Err(err),
        }
    }

    /// Debits `amount` when the balance covers it.
    ///
    /// # Returns
    /// - `Ok(Some(balance))` - New balance after the debit
    /// - `Ok(None)` - Balance too low, nothing changed
    pub async fn spend(&self, user_id: i32, amount: i64) -> Result<Option<i64>, DbErr> {
        let result = entity::prelude::CasinoBalance::update_many()
            .col_expr(
                entity::casino_balance::Column::Balance,
                Expr::col(entity::casino_balance::Column::Balance).sub(amount),
            )
            .col_expr(
                entity::casino_balance::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::casino_balance::Column::UserId.eq(user_id))
            .filter(entity::casino_balance::Column::Balance.gte(amount))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(self.find(user_id).await?.map(|balance| balance.balance))
    }

    /// Credits `amount` and returns the new balance.
    pub async fn credit(&self, user_id: i32, amount: i64) -> Result<i64, DbErr> {
        entity::prelude::CasinoBalance::update_many()
            .col_expr(
                entity::casino_balance::Column::Balance,
                Expr::col(entity::casino_balance::Column::Balance).add(amount),
            )
            .col_expr(
                entity::casino_balance::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::casino_balance::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        let balance = self
            .find(user_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("casino balance {}", user_id)))?;

        Ok(balance.balance)
    }

    /// Credits `bonus` unless it was already claimed on `today`.
    ///
    /// # Returns
    /// - `Ok(Some(balance))` - Bonus credited, new balance
    /// - `Ok(None)` - Already claimed today
    pub async fn claim_daily(
        &self,
        user_id: i32,
        today: NaiveDate,
        bonus: i64,
    ) -> Result<Option<Balance>, DbErr> {
        let result = entity::prelude::CasinoBalance::update_many()
            .col_expr(
                entity::casino_balance::Column::Balance,
                Expr::col(entity::casino_balance::Column::Balance).add(bonus),
            )
            .col_expr(
                entity::casino_balance::Column::LastDailyClaim,
                Expr::value(today),
            )
            .col_expr(
                entity::casino_balance::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::casino_balance::Column::UserId.eq(user_id))
            .filter(
                Condition::any()
                    .add(entity::casino_balance::Column::LastDailyClaim.is_null())
                    .add(entity::casino_balance::Column::LastDailyClaim.lt(today)),
            )
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find(user_id).await
    }
}
