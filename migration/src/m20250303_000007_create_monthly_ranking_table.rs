use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MonthlyRanking::Table)
                    .if_not_exists()
                    .col(pk_auto(MonthlyRanking::Id))
                    .col(string(MonthlyRanking::Month))
                    .col(integer(MonthlyRanking::UserId))
                    .col(integer(MonthlyRanking::Position))
                    .col(integer(MonthlyRanking::SkillRating))
                    .col(integer(MonthlyRanking::Matches))
                    .col(integer(MonthlyRanking::Kills))
                    .col(
                        timestamp_with_time_zone(MonthlyRanking::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_monthly_ranking_user_id")
                            .from(MonthlyRanking::Table, MonthlyRanking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_monthly_ranking_month_user_id")
                    .table(MonthlyRanking::Table)
                    .col(MonthlyRanking::Month)
                    .col(MonthlyRanking::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MonthlyRanking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MonthlyRanking {
    Table,
    Id,
    Month,
    UserId,
    Position,
    SkillRating,
    Matches,
    Kills,
    CreatedAt,
}
