use chrono::Utc;
use sea_orm::{
    prelude::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::bet::{Bet, BetStatus, CreateBetParam};

pub struct BetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateBetParam) -> Result<Bet, DbErr> {
        let entity = entity::bet::ActiveModel {
            bettor_id: ActiveValue::Set(param.bettor_id),
            target_user_id: ActiveValue::Set(param.target_user_id),
            bet_type: ActiveValue::Set(param.bet_type.as_str().to_string()),
            threshold: ActiveValue::Set(param.threshold),
            amount: ActiveValue::Set(param.amount),
            odds: ActiveValue::Set(param.odds),
            status: ActiveValue::Set(BetStatus::Pending.as_str().to_string()),
            match_id: ActiveValue::Set(None),
            payout: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            resolved_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Bet::from_entity(entity)
    }

    /// Bets placed by a user, newest first.
    pub async fn get_by_bettor(&self, bettor_id: i32) -> Result<Vec<Bet>, DbErr> {
        entity::prelude::Bet::find()
            .filter(entity::bet::Column::BettorId.eq(bettor_id))
            .order_by_desc(entity::bet::Column::CreatedAt)
            .order_by_desc(entity::bet::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Bet::from_entity)
            .collect()
    }

    /// Pending bets on any of the given players, oldest first.
    pub async fn get_pending_by_targets(&self, target_ids: &[i32]) -> Result<Vec<Bet>, DbErr> {
        if target_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Bet::find()
            .filter(entity::bet::Column::Status.eq(BetStatus::Pending.as_str()))
            .filter(entity::bet::Column::TargetUserId.is_in(target_ids.iter().copied()))
            .order_by_asc(entity::bet::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Bet::from_entity)
            .collect()
    }

    /// Settles a pending bet against a match.
    ///
    /// Only pending bets are touched, so a bet is never settled twice.
    ///
    /// # Returns
    /// - `Ok(true)` - Bet settled
    /// - `Ok(false)` - Bet missing or already settled
    pub async fn resolve(
        &self,
        bet_id: i32,
        status: BetStatus,
        match_id: i32,
        payout: i64,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Bet::update_many()
            .col_expr(entity::bet::Column::Status, Expr::value(status.as_str()))
            .col_expr(entity::bet::Column::MatchId, Expr::value(match_id))
            .col_expr(entity::bet::Column::Payout, Expr::value(payout))
            .col_expr(entity::bet::Column::ResolvedAt, Expr::value(Utc::now()))
            .filter(entity::bet::Column::Id.eq(bet_id))
            .filter(entity::bet::Column::Status.eq(BetStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
