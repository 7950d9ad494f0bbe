use crate::server::{data::ranking::RankingRepository, model::ranking::RankingEntryParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod month;
