use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{UpdateUserParam, User},
    service::user::UserService,
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, match_stats::MatchStatsFactory},
};

mod recalculate_all;
mod update;
