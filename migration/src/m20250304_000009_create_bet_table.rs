use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250301_000002_create_matches_table::Matches,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bet::Table)
                    .if_not_exists()
                    .col(pk_auto(Bet::Id))
                    .col(integer(Bet::BettorId))
                    .col(integer(Bet::TargetUserId))
                    .col(string(Bet::BetType))
                    .col(double_null(Bet::Threshold))
                    .col(big_integer(Bet::Amount))
                    .col(double(Bet::Odds))
                    .col(string(Bet::Status).default("pending"))
                    .col(integer_null(Bet::MatchId))
                    .col(big_integer(Bet::Payout).default(0))
                    .col(
                        timestamp_with_time_zone(Bet::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Bet::ResolvedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bet_bettor_id")
                            .from(Bet::Table, Bet::BettorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bet_target_user_id")
                            .from(Bet::Table, Bet::TargetUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bet_match_id")
                            .from(Bet::Table, Bet::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bet {
    Table,
    Id,
    BettorId,
    TargetUserId,
    BetType,
    Threshold,
    Amount,
    Odds,
    Status,
    MatchId,
    Payout,
    CreatedAt,
    ResolvedAt,
}
