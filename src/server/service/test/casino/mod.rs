use crate::server::{
    error::{casino::CasinoError, AppError},
    model::casino::{CaseKind, DAILY_BONUS, STARTING_BALANCE},
    service::casino::CasinoService,
};
use chrono::NaiveDate;
use rand::{rngs::StdRng, SeedableRng};
use test_utils::{builder::TestBuilder, factory};

mod claim_daily;
mod spin;

fn casino_builder() -> TestBuilder {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::CasinoBalance)
}
