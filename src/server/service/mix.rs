//! Mix list signups, withdrawals and no-show penalties.

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::mix::MixStatus,
    server::{
        data::{is_unique_violation, mix::MixRepository, user::UserRepository},
        error::{mix::MixError, AppError},
        model::mix::{
            promotion_candidate, signup_placement, status_for, CreatePenaltyParam, MixDay,
            MixPenalty,
        },
    },
};

/// Reason stored when an admin records a no-show without one.
const DEFAULT_NO_SHOW_REASON: &str = "No-show";

pub struct MixService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MixService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Mix list of `date` as seen by `viewer_id`.
    pub async fn get_day(&self, date: NaiveDate, viewer_id: i32) -> Result<MixDay, AppError> {
        Ok(load_day(self.db, date, viewer_id).await?)
    }

    /// Signs a user up for a mix day.
    ///
    /// Clean players fill the main roster first; penalized players and overflow go to
    /// the substitute bench.
    ///
    /// # Returns
    /// - `Ok(MixDay)` - Updated list of the day
    /// - `Err(AppError::MixErr(DateInPast))` - `date` is before `today`
    /// - `Err(AppError::MixErr(Suspended))` - Penalty limit reached
    /// - `Err(AppError::MixErr(AlreadySignedUp))` - User already on the list
    pub async fn join(
        &self,
        user_id: i32,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<MixDay, AppError> {
        if date < today {
            return Err(MixError::DateInPast(date).into());
        }

        let repo = MixRepository::new(self.db);
        let penalties = repo.count_penalties(user_id).await?;
        let day = load_day(self.db, date, user_id).await?;

        let is_substitute = match signup_placement(penalties, day.main_count()) {
            MixStatus::Suspended => return Err(MixError::Suspended { penalties }.into()),
            MixStatus::Substitute => true,
            _ => false,
        };

        if day.signups.iter().any(|signup| signup.user_id == user_id) {
            return Err(MixError::AlreadySignedUp(date).into());
        }

        match repo.create_signup(user_id, date, is_substitute).await {
            Ok(_) => {}
            Err(err) if is_unique_violation(&err) => {
                return Err(MixError::AlreadySignedUp(date).into())
            }
            Err(err) => return Err(err.into()),
        }

        tracing::debug!(
            "User {} joined the mix on {} as {}",
            user_id,
            date,
            if is_substitute { "substitute" } else { "main" }
        );

        Ok(load_day(self.db, date, user_id).await?)
    }

    /// Withdraws a user's signup, promoting a substitute if a main slot frees up.
    ///
    /// # Returns
    /// - `Ok(MixDay)` - Updated list of the day
    /// - `Err(AppError::MixErr(NotSignedUp))` - No signup to withdraw
    pub async fn leave(&self, user_id: i32, date: NaiveDate) -> Result<MixDay, AppError> {
        let txn = self.db.begin().await?;

        if !remove_signup(&txn, user_id, date).await? {
            return Err(MixError::NotSignedUp(date).into());
        }

        txn.commit().await?;

        Ok(load_day(self.db, date, user_id).await?)
    }

    /// Records a no-show and drops the player's signup for that day.
    ///
    /// # Returns
    /// - `Ok(MixPenalty)` - The recorded penalty
    /// - `Err(AppError::NotFound)` - The user does not exist
    pub async fn record_no_show(
        &self,
        admin_id: i32,
        user_id: i32,
        date: NaiveDate,
        reason: Option<String>,
    ) -> Result<MixPenalty, AppError> {
        let reason = reason
            .map(|reason| reason.trim().to_string())
            .filter(|reason| !reason.is_empty())
            .unwrap_or_else(|| DEFAULT_NO_SHOW_REASON.to_string());

        let txn = self.db.begin().await?;
        let repo = MixRepository::new(&txn);

        if UserRepository::new(&txn).find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        let penalty = repo
            .create_penalty(CreatePenaltyParam {
                user_id,
                date,
                reason,
                created_by: Some(admin_id),
            })
            .await?;

        remove_signup(&txn, user_id, date).await?;

        txn.commit().await?;

        tracing::info!(
            "Admin {} recorded a no-show for user {} on {}",
            admin_id,
            user_id,
            date
        );

        Ok(penalty)
    }

    /// Penalties newest first, optionally for one user only.
    pub async fn get_penalties(&self, user_id: Option<i32>) -> Result<Vec<MixPenalty>, AppError> {
        Ok(MixRepository::new(self.db).get_penalties(user_id).await?)
    }

    pub async fn delete_penalty(&self, penalty_id: i32) -> Result<(), AppError> {
        if !MixRepository::new(self.db).delete_penalty(penalty_id).await? {
            return Err(AppError::NotFound(format!(
                "Penalty {} not found",
                penalty_id
            )));
        }

        Ok(())
    }
}

async fn load_day<C: ConnectionTrait>(
    db: &C,
    date: NaiveDate,
    viewer_id: i32,
) -> Result<MixDay, DbErr> {
    let repo = MixRepository::new(db);
    let signups = repo.get_signups_by_date(date).await?;

    let mut user_ids: Vec<i32> = signups.iter().map(|signup| signup.user_id).collect();
    user_ids.push(viewer_id);
    let penalties = repo.penalty_counts(&user_ids).await?;

    let viewer_penalties = penalties.get(&viewer_id).copied().unwrap_or(0);
    let viewer_signup = signups.iter().find(|signup| signup.user_id == viewer_id);
    let viewer_status = status_for(viewer_signup, viewer_penalties);

    Ok(MixDay {
        date,
        signups,
        penalties,
        viewer_status,
        viewer_penalties,
    })
}

/// Deletes the user's signup for `date`, promoting a substitute when it held a main slot.
///
/// Returns whether a signup existed.
async fn remove_signup<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    date: NaiveDate,
) -> Result<bool, DbErr> {
    let repo = MixRepository::new(db);
    let Some(signup) = repo.find_signup(user_id, date).await? else {
        return Ok(false);
    };

    repo.delete_signup(signup.id).await?;

    if !signup.is_substitute {
        let remaining = repo.get_signups_by_date(date).await?;
        let substitute_ids: Vec<i32> = remaining
            .iter()
            .filter(|s| s.is_substitute)
            .map(|s| s.user_id)
            .collect();
        let penalties = repo.penalty_counts(&substitute_ids).await?;

        if let Some(candidate) = promotion_candidate(&remaining, &penalties) {
            repo.set_substitute(candidate.id, false).await?;
            tracing::debug!(
                "Promoted user {} to the main roster on {}",
                candidate.user_id,
                date
            );
        }
    }

    Ok(true)
}
