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
                    .table(MixPenalty::Table)
                    .if_not_exists()
                    .col(pk_auto(MixPenalty::Id))
                    .col(integer(MixPenalty::UserId))
                    .col(date(MixPenalty::Date))
                    .col(string(MixPenalty::Reason))
                    .col(integer_null(MixPenalty::CreatedBy))
                    .col(
                        timestamp_with_time_zone(MixPenalty::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mix_penalty_user_id")
                            .from(MixPenalty::Table, MixPenalty::UserId)
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
            .drop_table(Table::drop().table(MixPenalty::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MixPenalty {
    Table,
    Id,
    UserId,
    Date,
    Reason,
    CreatedBy,
    CreatedAt,
}
