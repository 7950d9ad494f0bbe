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
                    .table(MixAvailability::Table)
                    .if_not_exists()
                    .col(pk_auto(MixAvailability::Id))
                    .col(integer(MixAvailability::UserId))
                    .col(date(MixAvailability::Date))
                    .col(boolean(MixAvailability::IsSubstitute).default(false))
                    .col(
                        timestamp_with_time_zone(MixAvailability::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mix_availability_user_id")
                            .from(MixAvailability::Table, MixAvailability::UserId)
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
                    .name("idx_mix_availability_user_id_date")
                    .table(MixAvailability::Table)
                    .col(MixAvailability::UserId)
                    .col(MixAvailability::Date)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MixAvailability::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MixAvailability {
    Table,
    Id,
    UserId,
    Date,
    IsSubstitute,
    CreatedAt,
}
