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
                    .table(CasinoBalance::Table)
                    .if_not_exists()
                    .col(integer(CasinoBalance::UserId).primary_key())
                    .col(big_integer(CasinoBalance::Balance))
                    .col(date_null(CasinoBalance::LastDailyClaim))
                    .col(
                        timestamp_with_time_zone(CasinoBalance::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_casino_balance_user_id")
                            .from(CasinoBalance::Table, CasinoBalance::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CasinoBalance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CasinoBalance {
    Table,
    UserId,
    Balance,
    LastDailyClaim,
    UpdatedAt,
}
