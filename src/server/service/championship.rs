use sea_orm::DatabaseConnection;

use crate::{
    model::championship::RegistrationStatus,
    server::{
        data::{championship::ChampionshipRepository, is_unique_violation},
        error::AppError,
        model::championship::{CreateRegistrationParam, Registration},
    },
};

pub struct ChampionshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChampionshipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Registration>, AppError> {
        Ok(ChampionshipRepository::new(self.db).get_all().await?)
    }

    /// Registers a user for the championship.
    ///
    /// # Returns
    /// - `Ok(Registration)` - Pending registration
    /// - `Err(AppError::Conflict)` - User already registered
    pub async fn register(&self, param: CreateRegistrationParam) -> Result<Registration, AppError> {
        let repo = ChampionshipRepository::new(self.db);
        let user_id = param.user_id;

        if repo.find_by_user(user_id).await?.is_some() {
            return Err(already_registered());
        }

        match repo.create(param).await {
            Ok(registration) => Ok(registration),
            Err(err) if is_unique_violation(&err) => Err(already_registered()),
            Err(err) => Err(err.into()),
        }
    }

    /// Looks up a registration so the caller can check ownership before withdrawing.
    pub async fn get_by_id(&self, registration_id: i32) -> Result<Registration, AppError> {
        ChampionshipRepository::new(self.db)
            .find_by_id(registration_id)
            .await?
            .ok_or_else(|| not_found(registration_id))
    }

    pub async fn update_status(
        &self,
        registration_id: i32,
        status: RegistrationStatus,
    ) -> Result<Registration, AppError> {
        ChampionshipRepository::new(self.db)
            .update_status(registration_id, status)
            .await?
            .ok_or_else(|| not_found(registration_id))
    }

    pub async fn withdraw(&self, registration_id: i32) -> Result<(), AppError> {
        if !ChampionshipRepository::new(self.db)
            .delete(registration_id)
            .await?
        {
            return Err(not_found(registration_id));
        }

        Ok(())
    }
}

fn already_registered() -> AppError {
    AppError::Conflict("Already registered for the championship".to_string())
}

fn not_found(registration_id: i32) -> AppError {
    AppError::NotFound(format!("Registration {} not found", registration_id))
}
