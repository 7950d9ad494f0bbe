use crate::server::{
    data::user::UserRepository,
    model::user::{UpdateUserParam, UpsertUserParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_or_create_by_steam_id;
mod get_all_paginated;
mod recalculate_user_stats;
mod update;
mod upsert;
