use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::matches::{MatchDto, MatchStatsDto};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    /// SteamID64, serialized as a string so JavaScript clients keep full precision.
    pub steam_id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub is_admin: bool,
    pub stats: UserStatsDto,
    pub created_at: DateTime<Utc>,
}

/// Cumulative totals plus the ratios derived from them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsDto {
    pub total_kills: i32,
    pub total_deaths: i32,
    pub total_assists: i32,
    pub total_headshots: i32,
    pub total_damage: i64,
    pub total_matches: i32,
    pub total_mvps: i32,
    pub total_aces: i32,
    pub total_quad_kills: i32,
    pub total_triple_kills: i32,
    pub total_double_kills: i32,
    pub total_clutch_1v1_wins: i32,
    pub total_clutch_1v2_wins: i32,
    pub total_entry_count: i32,
    pub total_entry_wins: i32,
    pub total_enemies_flashed: i32,
    pub total_utility_damage: i64,
    pub kd: f64,
    pub hs_percent: f64,
    pub adr: f64,
    pub skill_rating: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Partial update of a user. `isAdmin` is only honoured for admins.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub is_admin: Option<bool>,
}

/// One entry of a player's match history.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserMatchDto {
    #[serde(rename = "match")]
    pub game: MatchDto,
    pub stats: MatchStatsDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecalculatedDto {
    pub users_recalculated: u64,
}
