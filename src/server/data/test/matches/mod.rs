use crate::server::{
    data::{is_unique_violation, matches::MatchRepository},
    model::matches::CreateMatchParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
