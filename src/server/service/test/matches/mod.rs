use crate::server::{error::AppError, service::matches::MatchService};
use sea_orm::EntityTrait;
use test_utils::{
    builder::TestBuilder,
    factory::{self, match_stats::MatchStatsFactory},
};

mod delete;
