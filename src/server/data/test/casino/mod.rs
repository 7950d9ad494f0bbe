use chrono::NaiveDate;
use crate::server::{data::casino::CasinoRepository, model::casino::STARTING_BALANCE};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod balance;
