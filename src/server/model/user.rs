//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{PaginatedUsersDto, UpdateUserDto, UserDto, UserMatchDto, UserStatsDto},
    server::model::{
        matches::{Match, MatchStats},
        stats::UserTotals,
    },
};

/// Player account identified by SteamID64, with cumulative stats.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub steam_id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub is_admin: bool,
    pub totals: UserTotals,
    pub skill_rating: i32,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        let totals = self.totals;

        UserDto {
            id: self.id,
            steam_id: self.steam_id,
            name: self.name,
            avatar_url: self.avatar_url,
            is_admin: self.is_admin,
            stats: UserStatsDto {
                kd: round2(totals.kd()),
                hs_percent: round2(totals.hs_percent()),
                adr: round2(totals.adr()),
                total_kills: totals.kills,
                total_deaths: totals.deaths,
                total_assists: totals.assists,
                total_headshots: totals.headshots,
                total_damage: totals.damage,
                total_matches: totals.matches,
                total_mvps: totals.mvps,
                total_aces: totals.aces,
                total_quad_kills: totals.quad_kills,
                total_triple_kills: totals.triple_kills,
                total_double_kills: totals.double_kills,
                total_clutch_1v1_wins: totals.clutch_1v1_wins,
                total_clutch_1v2_wins: totals.clutch_1v2_wins,
                total_entry_count: totals.entry_count,
                total_entry_wins: totals.entry_wins,
                total_enemies_flashed: totals.enemies_flashed,
                total_utility_damage: totals.utility_damage,
                skill_rating: self.skill_rating,
            },
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            totals: UserTotals::from_user(&entity),
            id: entity.id,
            steam_id: entity.steam_id,
            name: entity.name,
            avatar_url: entity.avatar_url,
            is_admin: entity.is_admin,
            skill_rating: entity.skill_rating,
            created_at: entity.created_at,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parameters for upserting a user during Steam login.
///
/// The optional `is_admin` field preserves existing admin status when None.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub steam_id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub is_admin: Option<bool>,
}

/// Partial update of a user profile.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub is_admin: Option<bool>,
}

impl UpdateUserParam {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name.map(|name| name.trim().to_string()),
            avatar_url: dto.avatar_url,
            is_admin: dto.is_admin,
        }
    }
}

/// Paginated collection of users ordered by skill rating.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// A match a user played, with their stat line.
#[derive(Debug, Clone, PartialEq)]
pub struct UserMatch {
    pub game: Match,
    pub stats: MatchStats,
}

impl UserMatch {
    pub fn into_dto(self) -> UserMatchDto {
        UserMatchDto {
            game: self.game.into_dto(),
            stats: self.stats.into_dto(),
        }
    }
}
