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
                    .table(ChampionshipRegistration::Table)
                    .if_not_exists()
                    .col(pk_auto(ChampionshipRegistration::Id))
                    .col(integer_uniq(ChampionshipRegistration::UserId))
                    .col(string_null(ChampionshipRegistration::TeamName))
                    .col(text_null(ChampionshipRegistration::Notes))
                    .col(string(ChampionshipRegistration::Status).default("pending"))
                    .col(
                        timestamp_with_time_zone(ChampionshipRegistration::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_championship_registration_user_id")
                            .from(
                                ChampionshipRegistration::Table,
                                ChampionshipRegistration::UserId,
                            )
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
            .drop_table(
                Table::drop()
                    .table(ChampionshipRegistration::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChampionshipRegistration {
    Table,
    Id,
    UserId,
    TeamName,
    Notes,
    Status,
    CreatedAt,
}
