use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::model::payment::{CreatePaymentDto, PaymentDto, PaymentStatus, UpdatePaymentDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub user_id: i32,
    pub amount: i64,
    pub description: String,
    pub status: PaymentStatus,
    pub due_date: Option<NaiveDate>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Result<Self, DbErr> {
        let status = PaymentStatus::parse(&entity.status).ok_or_else(|| {
            DbErr::Custom(format!("Unknown payment status '{}'", entity.status))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            amount: entity.amount,
            description: entity.description,
            status,
            due_date: entity.due_date,
            paid_at: entity.paid_at,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            user_id: self.user_id,
            amount: self.amount,
            description: self.description,
            status: self.status,
            due_date: self.due_date,
            paid_at: self.paid_at,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePaymentParam {
    pub user_id: i32,
    pub amount: i64,
    pub description: String,
    pub due_date: Option<NaiveDate>,
}

impl CreatePaymentParam {
    pub fn from_dto(dto: CreatePaymentDto) -> Self {
        Self {
            user_id: dto.user_id,
            amount: dto.amount,
            description: dto.description.trim().to_string(),
            due_date: dto.due_date,
        }
    }
}

/// Partial update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdatePaymentParam {
    pub amount: Option<i64>,
    pub description: Option<String>,
    pub status: Option<PaymentStatus>,
    pub due_date: Option<NaiveDate>,
}

impl UpdatePaymentParam {
    pub fn from_dto(dto: UpdatePaymentDto) -> Self {
        Self {
            amount: dto.amount,
            description: dto.description.map(|d| d.trim().to_string()),
            status: dto.status,
            due_date: dto.due_date,
        }
    }
}
