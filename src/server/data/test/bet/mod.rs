use crate::server::{
    data::bet::BetRepository,
    model::bet::{BetStatus, BetType, CreateBetParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod resolve;
