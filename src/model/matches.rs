use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub id: i32,
    pub external_match_id: String,
    pub map_number: i32,
    pub map: String,
    pub team1_name: String,
    pub team2_name: String,
    pub team1_score: i32,
    pub team2_score: i32,
    pub winner_team: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatsDto {
    pub id: i32,
    pub match_id: i32,
    pub user_id: i32,
    pub player_name: Option<String>,
    pub team: String,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub headshots: i32,
    pub damage: i32,
    pub enemy5ks: i32,
    pub enemy4ks: i32,
    pub enemy3ks: i32,
    pub enemy2ks: i32,
    pub utility_count: i32,
    pub utility_damage: i32,
    pub utility_successes: i32,
    pub utility_enemies: i32,
    pub flash_count: i32,
    pub flash_successes: i32,
    pub enemies_flashed: i32,
    pub v1_count: i32,
    pub v1_wins: i32,
    pub v2_count: i32,
    pub v2_wins: i32,
    pub entry_count: i32,
    pub entry_wins: i32,
    pub shots_fired: i32,
    pub shots_on_target: i32,
    pub is_mvp: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetailDto {
    #[serde(rename = "match")]
    pub game: MatchDto,
    pub players: Vec<MatchStatsDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedMatchesDto {
    pub matches: Vec<MatchDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Body of `POST /api/matches/import`.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportMatchDto {
    pub csv_content: String,
    pub map: String,
    pub winner_team: Option<String>,
    pub team1_score: Option<i32>,
    pub team2_score: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportResultDto {
    #[serde(rename = "match")]
    pub game: MatchDto,
    pub players_imported: u64,
    pub skipped_rows: u64,
    pub mvp_user_id: Option<i32>,
    pub bets_resolved: u64,
}

/// 409 body returned when the match was imported before.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateMatchDto {
    pub error: String,
    pub existing_match: MatchDto,
}
