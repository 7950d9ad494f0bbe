use crate::server::{error::AppError, service::ranking::RankingService};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod delete_month;
mod generate;

fn ranking_builder() -> TestBuilder {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MonthlyRanking)
}
