use chrono::NaiveDate;
use crate::server::{data::mix::MixRepository, model::mix::CreatePenaltyParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod penalties;
mod signups;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, 1).unwrap()
}
