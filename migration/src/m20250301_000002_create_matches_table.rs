use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(pk_auto(Matches::Id))
                    .col(string(Matches::ExternalMatchId))
                    .col(integer(Matches::MapNumber))
                    .col(string(Matches::Map))
                    .col(string(Matches::Team1Name))
                    .col(string(Matches::Team2Name))
                    .col(integer(Matches::Team1Score))
                    .col(integer(Matches::Team2Score))
                    .col(string_null(Matches::WinnerTeam))
                    .col(
                        timestamp_with_time_zone(Matches::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Dedup key for imports; a concurrent duplicate import fails here.
        manager
            .create_index(
                Index::create()
                    .name("idx_matches_external_match_id_map_number")
                    .table(Matches::Table)
                    .col(Matches::ExternalMatchId)
                    .col(Matches::MapNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Matches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Matches {
    Table,
    Id,
    ExternalMatchId,
    MapNumber,
    Map,
    #[sea_orm(iden = "team1_name")]
    Team1Name,
    #[sea_orm(iden = "team2_name")]
    Team2Name,
    #[sea_orm(iden = "team1_score")]
    Team1Score,
    #[sea_orm(iden = "team2_score")]
    Team2Score,
    WinnerTeam,
    CreatedAt,
}
