use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250301_000001_create_user_table::User, m20250301_000002_create_matches_table::Matches};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchStats::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchStats::Id))
                    .col(integer(MatchStats::MatchId))
                    .col(integer(MatchStats::UserId))
                    .col(string(MatchStats::Team))
                    .col(integer(MatchStats::Kills).default(0))
                    .col(integer(MatchStats::Deaths).default(0))
                    .col(integer(MatchStats::Assists).default(0))
                    .col(integer(MatchStats::Headshots).default(0))
                    .col(integer(MatchStats::Damage).default(0))
                    .col(integer(MatchStats::Enemy5ks).default(0))
                    .col(integer(MatchStats::Enemy4ks).default(0))
                    .col(integer(MatchStats::Enemy3ks).default(0))
                    .col(integer(MatchStats::Enemy2ks).default(0))
                    .col(integer(MatchStats::UtilityCount).default(0))
                    .col(integer(MatchStats::UtilityDamage).default(0))
                    .col(integer(MatchStats::UtilitySuccesses).default(0))
                    .col(integer(MatchStats::UtilityEnemies).default(0))
                    .col(integer(MatchStats::FlashCount).default(0))
                    .col(integer(MatchStats::FlashSuccesses).default(0))
                    .col(integer(MatchStats::EnemiesFlashed).default(0))
                    .col(integer(MatchStats::V1Count).default(0))
                    .col(integer(MatchStats::V1Wins).default(0))
                    .col(integer(MatchStats::V2Count).default(0))
                    .col(integer(MatchStats::V2Wins).default(0))
                    .col(integer(MatchStats::EntryCount).default(0))
                    .col(integer(MatchStats::EntryWins).default(0))
                    .col(integer(MatchStats::ShotsFired).default(0))
                    .col(integer(MatchStats::ShotsOnTarget).default(0))
                    .col(boolean(MatchStats::IsMvp).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_stats_match_id")
                            .from(MatchStats::Table, MatchStats::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_stats_user_id")
                            .from(MatchStats::Table, MatchStats::UserId)
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
                    .name("idx_match_stats_user_id")
                    .table(MatchStats::Table)
                    .col(MatchStats::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchStats::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MatchStats {
    Table,
    Id,
    MatchId,
    UserId,
    Team,
    Kills,
    Deaths,
    Assists,
    Headshots,
    Damage,
    #[sea_orm(iden = "enemy5ks")]
    Enemy5ks,
    #[sea_orm(iden = "enemy4ks")]
    Enemy4ks,
    #[sea_orm(iden = "enemy3ks")]
    Enemy3ks,
    #[sea_orm(iden = "enemy2ks")]
    Enemy2ks,
    UtilityCount,
    UtilityDamage,
    UtilitySuccesses,
    UtilityEnemies,
    FlashCount,
    FlashSuccesses,
    EnemiesFlashed,
    #[sea_orm(iden = "v1_count")]
    V1Count,
    #[sea_orm(iden = "v1_wins")]
    V1Wins,
    #[sea_orm(iden = "v2_count")]
    V2Count,
    #[sea_orm(iden = "v2_wins")]
    V2Wins,
    EntryCount,
    EntryWins,
    ShotsFired,
    ShotsOnTarget,
    IsMvp,
}
