//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but only exposes the keys of
//! its own concern:
//! - `AuthSession` - the logged-in user id
//! - `CsrfSession` - the OpenID `state` token for the Steam login round trip
//! - `LoginFlowSession` - flags carried across the Steam redirect (admin code)

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_AUTH_SET_ADMIN: &str = "auth:set_admin";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's database id after a successful login.
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the logged-in user's id.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Clears all data from the session, including pending login state.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection for the Steam login round trip.
///
/// A token is stored when the login redirect is built and must come back unchanged
/// in the callback's `state` parameter.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token so each token validates at most once.
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}

/// Flags that must survive the redirect to Steam and back.
pub struct LoginFlowSession<'a> {
    session: &'a Session,
}

impl<'a> LoginFlowSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks that a valid admin code was presented when the login started.
    pub async fn set_admin_flag(&self, set_admin: bool) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_SET_ADMIN, set_admin)
            .await?;
        Ok(())
    }

    /// Retrieves and removes the admin flag, defaulting to `false`.
    pub async fn take_admin_flag(&self) -> Result<bool, AppError> {
        let set_admin = self
            .session
            .remove(SESSION_AUTH_SET_ADMIN)
            .await?
            .unwrap_or(false);
        Ok(set_admin)
    }
}
