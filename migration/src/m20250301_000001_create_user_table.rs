use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::SteamId))
                    .col(string(User::Name))
                    .col(string_null(User::AvatarUrl))
                    .col(boolean(User::IsAdmin).default(false))
                    .col(integer(User::TotalKills).default(0))
                    .col(integer(User::TotalDeaths).default(0))
                    .col(integer(User::TotalAssists).default(0))
                    .col(integer(User::TotalHeadshots).default(0))
                    .col(big_integer(User::TotalDamage).default(0))
                    .col(integer(User::TotalMatches).default(0))
                    .col(integer(User::TotalMvps).default(0))
                    .col(integer(User::TotalAces).default(0))
                    .col(integer(User::TotalQuadKills).default(0))
                    .col(integer(User::TotalTripleKills).default(0))
                    .col(integer(User::TotalDoubleKills).default(0))
                    .col(integer(User::TotalClutch1v1Wins).default(0))
                    .col(integer(User::TotalClutch1v2Wins).default(0))
                    .col(integer(User::TotalEntryCount).default(0))
                    .col(integer(User::TotalEntryWins).default(0))
                    .col(integer(User::TotalEnemiesFlashed).default(0))
                    .col(big_integer(User::TotalUtilityDamage).default(0))
                    .col(integer(User::SkillRating).default(1000))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    SteamId,
    Name,
    AvatarUrl,
    IsAdmin,
    TotalKills,
    TotalDeaths,
    TotalAssists,
    TotalHeadshots,
    TotalDamage,
    TotalMatches,
    TotalMvps,
    TotalAces,
    TotalQuadKills,
    TotalTripleKills,
    TotalDoubleKills,
    #[sea_orm(iden = "total_clutch_1v1_wins")]
    TotalClutch1v1Wins,
    #[sea_orm(iden = "total_clutch_1v2_wins")]
    TotalClutch1v2Wins,
    TotalEntryCount,
    TotalEntryWins,
    TotalEnemiesFlashed,
    TotalUtilityDamage,
    SkillRating,
    CreatedAt,
}
