use crate::server::{
    data::match_stats::MatchStatsRepository,
    model::{matches::CreateMatchStatsParam, stats::StatLine},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_many;
