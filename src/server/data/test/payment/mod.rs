use crate::{
    model::payment::PaymentStatus,
    server::{
        data::payment::PaymentRepository,
        model::payment::{CreatePaymentParam, UpdatePaymentParam},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod update;
