use crate::{
    model::payment::PaymentStatus,
    server::{
        error::AppError,
        model::{payment::CreatePaymentParam, user::User},
        service::payment::PaymentService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;

fn payment_builder() -> TestBuilder {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Payment)
}

fn param(user_id: i32, amount: i64) -> CreatePaymentParam {
    CreatePaymentParam {
        user_id,
        amount,
        description: "Server rental".to_string(),
        due_date: None,
    }
}
