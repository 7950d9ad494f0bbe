use crate::server::{
    error::AppError,
    model::news::{CreateNewsParam, UpdateNewsParam},
    service::news::NewsService,
};
use test_utils::{builder::TestBuilder, factory};

mod crud;

fn news_builder() -> TestBuilder {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::News)
}
