pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_matches_table;
mod m20250301_000003_create_match_stats_table;
mod m20250302_000004_create_payment_table;
mod m20250302_000005_create_report_table;
mod m20250302_000006_create_championship_registration_table;
mod m20250303_000007_create_monthly_ranking_table;
mod m20250304_000008_create_casino_balance_table;
mod m20250304_000009_create_bet_table;
mod m20250305_000010_create_mix_availability_table;
mod m20250305_000011_create_mix_penalty_table;
mod m20250306_000012_create_news_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_matches_table::Migration),
            Box::new(m20250301_000003_create_match_stats_table::Migration),
            Box::new(m20250302_000004_create_payment_table::Migration),
            Box::new(m20250302_000005_create_report_table::Migration),
            Box::new(m20250302_000006_create_championship_registration_table::Migration),
            Box::new(m20250303_000007_create_monthly_ranking_table::Migration),
            Box::new(m20250304_000008_create_casino_balance_table::Migration),
            Box::new(m20250304_000009_create_bet_table::Migration),
            Box::new(m20250305_000010_create_mix_availability_table::Migration),
            Box::new(m20250305_000011_create_mix_penalty_table::Migration),
            Box::new(m20250306_000012_create_news_table::Migration),
        ]
    }
}
