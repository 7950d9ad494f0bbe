use crate::{
    model::mix::MixStatus,
    server::{
        error::{mix::MixError, AppError},
        service::mix::MixService,
    },
};
use chrono::NaiveDate;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod join;
mod leave;
mod record_no_show;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, 1).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 5, 30).unwrap()
}
