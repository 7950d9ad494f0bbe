use crate::{
    model::championship::RegistrationStatus,
    server::{
        error::AppError, model::championship::CreateRegistrationParam,
        service::championship::ChampionshipService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod register;

fn param(user_id: i32) -> CreateRegistrationParam {
    CreateRegistrationParam {
        user_id,
        team_name: Some("Night Owls".to_string()),
        notes: None,
    }
}

fn championship_builder() -> TestBuilder {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::ChampionshipRegistration)
}
