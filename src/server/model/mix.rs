//! Mix list domain models and placement rules.
//!
//! A user on a given day is in one of four states: not signed up, on the main roster,
//! on the substitute bench, or suspended. Penalties push players to the bench and
//! eventually block signups entirely.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::mix::{MixDayDto, MixEntryDto, MixPenaltyDto, MixStatus};

/// Players on the main roster of a mix.
pub const MAIN_ROSTER_SIZE: u64 = 10;

/// Penalty count at which a player can no longer sign up.
pub const SUSPENSION_PENALTIES: u64 = 3;

/// A signup for a mix day, joined with the player's profile.
#[derive(Debug, Clone, PartialEq)]
pub struct MixSignup {
    pub id: i32,
    pub user_id: i32,
    pub date: NaiveDate,
    pub is_substitute: bool,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub avatar_url: Option<String>,
}

impl MixSignup {
    pub fn from_entity(
        entity: entity::mix_availability::Model,
        user: Option<entity::user::Model>,
    ) -> Self {
        let (name, avatar_url) = match user {
            Some(user) => (user.name, user.avatar_url),
            None => (String::new(), None),
        };

        Self {
            id: entity.id,
            user_id: entity.user_id,
            date: entity.date,
            is_substitute: entity.is_substitute,
            created_at: entity.created_at,
            name,
            avatar_url,
        }
    }

    fn into_entry_dto(self, penalties: u64) -> MixEntryDto {
        MixEntryDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            avatar_url: self.avatar_url,
            is_substitute: self.is_substitute,
            penalties,
            joined_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MixPenalty {
    pub id: i32,
    pub user_id: i32,
    pub date: NaiveDate,
    pub reason: String,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl MixPenalty {
    pub fn from_entity(entity: entity::mix_penalty::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            date: entity.date,
            reason: entity.reason,
            created_by: entity.created_by,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MixPenaltyDto {
        MixPenaltyDto {
            id: self.id,
            user_id: self.user_id,
            date: self.date,
            reason: self.reason,
            created_by: self.created_by,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePenaltyParam {
    pub user_id: i32,
    pub date: NaiveDate,
    pub reason: String,
    pub created_by: Option<i32>,
}

/// Where a new signup lands, given the player's penalties and the current main roster.
///
/// Returns `Suspended` when the player may not sign up at all.
pub fn signup_placement(penalties: u64, main_count: u64) -> MixStatus {
    if penalties >= SUSPENSION_PENALTIES {
        MixStatus::Suspended
    } else if penalties >= 1 || main_count >= MAIN_ROSTER_SIZE {
        MixStatus::Substitute
    } else {
        MixStatus::Main
    }
}

/// Current status of a player for a day.
pub fn status_for(signup: Option<&MixSignup>, penalties: u64) -> MixStatus {
    match signup {
        Some(signup) if signup.is_substitute => MixStatus::Substitute,
        Some(_) => MixStatus::Main,
        None if penalties >= SUSPENSION_PENALTIES => MixStatus::Suspended,
        None => MixStatus::NotSignedUp,
    }
}

/// Signup to move up when a main roster slot frees.
///
/// `substitutes` must be in join order. Only substitutes without penalties qualify.
pub fn promotion_candidate<'s>(
    substitutes: &'s [MixSignup],
    penalties: &HashMap<i32, u64>,
) -> Option<&'s MixSignup> {
    substitutes
        .iter()
        .filter(|signup| signup.is_substitute)
        .find(|signup| penalties.get(&signup.user_id).copied().unwrap_or(0) == 0)
}

/// Mix list of one day as seen by a given user.
#[derive(Debug, Clone, PartialEq)]
pub struct MixDay {
    pub date: NaiveDate,
    /// Every signup of the day in join order.
    pub signups: Vec<MixSignup>,
    pub penalties: HashMap<i32, u64>,
    pub viewer_status: MixStatus,
    pub viewer_penalties: u64,
}

impl MixDay {
    pub fn main_count(&self) -> u64 {
        self.signups.iter().filter(|s| !s.is_substitute).count() as u64
    }

    pub fn into_dto(self) -> MixDayDto {
        let penalties = self.penalties;
        let (substitutes, main): (Vec<_>, Vec<_>) =
            self.signups.into_iter().partition(|s| s.is_substitute);
        let to_dto = |signup: MixSignup| {
            let count = penalties.get(&signup.user_id).copied().unwrap_or(0);
            signup.into_entry_dto(count)
        };

        MixDayDto {
            date: self.date,
            main: main.into_iter().map(to_dto).collect(),
            substitutes: substitutes.into_iter().map(to_dto).collect(),
            my_status: self.viewer_status,
            my_penalties: self.viewer_penalties,
        }
    }
}
