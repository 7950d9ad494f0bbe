use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::payment::PaymentStatus,
    server::model::payment::{CreatePaymentParam, Payment, UpdatePaymentParam},
};

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreatePaymentParam) -> Result<Payment, DbErr> {
        let entity = entity::payment::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            amount: ActiveValue::Set(param.amount),
            description: ActiveValue::Set(param.description),
            status: ActiveValue::Set(PaymentStatus::Pending.as_str().to_string()),
            due_date: ActiveValue::Set(param.due_date),
            paid_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Payment::from_entity(entity)
    }

    /// Payments newest first, optionally restricted to one user.
    pub async fn get_all(&self, user_id: Option<i32>) -> Result<Vec<Payment>, DbErr> {
        let mut query = entity::prelude::Payment::find();
        if let Some(user_id) = user_id {
            query = query.filter(entity::payment::Column::UserId.eq(user_id));
        }

        query
            .order_by_desc(entity::payment::Column::CreatedAt)
            .order_by_desc(entity::payment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Payment::from_entity)
            .collect()
    }

    /// Applies a partial update. Moving to `paid` stamps `paid_at`, leaving it clears it.
    pub async fn update(
        &self,
        payment_id: i32,
        param: UpdatePaymentParam,
    ) -> Result<Option<Payment>, DbErr> {
        let Some(existing) = entity::prelude::Payment::find_by_id(payment_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let was_paid = existing.status == PaymentStatus::Paid.as_str();
        let mut active: entity::payment::ActiveModel = existing.into();

        if let Some(amount) = param.amount {
            active.amount = ActiveValue::Set(amount);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(due_date) = param.due_date {
            active.due_date = ActiveValue::Set(Some(due_date));
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
            match (status == PaymentStatus::Paid, was_paid) {
                (true, false) => active.paid_at = ActiveValue::Set(Some(Utc::now())),
                (false, true) => active.paid_at = ActiveValue::Set(None),
                _ => {}
            }
        }

        let updated = active.update(self.db).await?;
        Payment::from_entity(updated).map(Some)
    }

    pub async fn delete(&self, payment_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Payment::delete_by_id(payment_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
