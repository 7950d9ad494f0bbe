use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    /// The user must hold the admin flag.
    Admin,
    /// The user must be the given user, or an admin.
    SelfOrAdmin(i32),
}

/// Resolves the session user and checks it against a set of permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged-in user when every permission holds.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user satisfying all permissions
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session points at a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin action without admin permissions".to_string(),
                        )
                        .into());
                    }
                }
                Permission::SelfOrAdmin(target_id) => {
                    if user.id != *target_id && !user.is_admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("User attempted to act on behalf of user {}", target_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
