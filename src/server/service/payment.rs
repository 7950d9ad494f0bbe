use sea_orm::DatabaseConnection;

use crate::server::{
    data::{payment::PaymentRepository, user::UserRepository},
    error::AppError,
    model::{
        payment::{CreatePaymentParam, Payment, UpdatePaymentParam},
        user::User,
    },
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Payments visible to `viewer`: every payment for admins, their own otherwise.
    pub async fn get_visible(&self, viewer: &User) -> Result<Vec<Payment>, AppError> {
        let owner = (!viewer.is_admin).then_some(viewer.id);
        Ok(PaymentRepository::new(self.db).get_all(owner).await?)
    }

    /// Creates a pending payment for a user.
    ///
    /// # Returns
    /// - `Ok(Payment)` - Created payment
    /// - `Err(AppError::BadRequest)` - Non-positive amount or empty description
    /// - `Err(AppError::NotFound)` - Target user does not exist
    pub async fn create(&self, param: CreatePaymentParam) -> Result<Payment, AppError> {
        validate_amount(param.amount)?;
        if param.description.is_empty() {
            return Err(AppError::BadRequest("Description is required".to_string()));
        }

        if UserRepository::new(self.db)
            .find_by_id(param.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "User {} not found",
                param.user_id
            )));
        }

        Ok(PaymentRepository::new(self.db).create(param).await?)
    }

    pub async fn update(
        &self,
        payment_id: i32,
        param: UpdatePaymentParam,
    ) -> Result<Payment, AppError> {
        if let Some(amount) = param.amount {
            validate_amount(amount)?;
        }
        if param.description.as_deref().is_some_and(str::is_empty) {
            return Err(AppError::BadRequest("Description cannot be empty".to_string()));
        }

        PaymentRepository::new(self.db)
            .update(payment_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Payment {} not found", payment_id)))
    }

    pub async fn delete(&self, payment_id: i32) -> Result<(), AppError> {
        if !PaymentRepository::new(self.db).delete(payment_id).await? {
            return Err(AppError::NotFound(format!(
                "Payment {} not found",
                payment_id
            )));
        }

        Ok(())
    }
}

fn validate_amount(amount: i64) -> Result<(), AppError> {
    if amount <= 0 {
        return Err(AppError::BadRequest(
            "Amount must be a positive number of cents".to_string(),
        ));
    }

    Ok(())
}
