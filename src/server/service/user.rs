use sea_orm::DatabaseConnection;

use crate::server::{
    data::{match_stats::MatchStatsRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{PaginatedUsers, UpdateUserParam, User, UserMatch},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets users ordered by skill rating, one page at a time.
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let per_page = per_page.clamp(1, 100);
        Ok(UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?)
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }

    /// A user's match history, newest first.
    pub async fn get_matches(&self, user_id: i32) -> Result<Vec<UserMatch>, AppError> {
        self.get_by_id(user_id).await?;

        let history = MatchStatsRepository::new(self.db)
            .get_history_by_user(user_id)
            .await?;

        Ok(history
            .into_iter()
            .map(|(stats, game)| UserMatch { game, stats })
            .collect())
    }

    /// Updates a profile.
    ///
    /// Users may change their own name and avatar; only admins may change the admin flag.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::BadRequest)` - Empty name
    /// - `Err(AppError::AuthErr(AccessDenied))` - Non-admin tried to change the admin flag
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn update(
        &self,
        actor: &User,
        user_id: i32,
        param: UpdateUserParam,
    ) -> Result<User, AppError> {
        if param.is_admin.is_some() && !actor.is_admin {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("non-admin tried to change admin flag of user {}", user_id),
            )
            .into());
        }
        if param.name.as_deref().is_some_and(str::is_empty) {
            return Err(AppError::BadRequest("Name cannot be empty".to_string()));
        }

        UserRepository::new(self.db)
            .update(user_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }

    pub async fn delete(&self, user_id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(user_id).await? {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        tracing::info!("Deleted user {}", user_id);

        Ok(())
    }

    /// Recomputes totals and skill rating of every user.
    ///
    /// Returns the number of users recalculated.
    pub async fn recalculate_all(&self) -> Result<u64, AppError> {
        let repo = UserRepository::new(self.db);
        let user_ids = repo.get_all_ids().await?;

        let mut recalculated = 0;
        for user_id in user_ids {
            if repo.recalculate_user_stats(user_id).await?.is_some() {
                recalculated += 1;
            }
        }

        tracing::info!("Recalculated stats of {} users", recalculated);

        Ok(recalculated)
    }
}
