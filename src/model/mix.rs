use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Where a user stands on a given mix day.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MixStatus {
    NotSignedUp,
    Main,
    Substitute,
    Suspended,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MixEntryDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub avatar_url: Option<String>,
    pub is_substitute: bool,
    pub penalties: u64,
    pub joined_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MixDayDto {
    pub date: NaiveDate,
    pub main: Vec<MixEntryDto>,
    pub substitutes: Vec<MixEntryDto>,
    pub my_status: MixStatus,
    pub my_penalties: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoShowDto {
    pub user_id: i32,
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MixPenaltyDto {
    pub id: i32,
    pub user_id: i32,
    pub date: NaiveDate,
    pub reason: String,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyQuery {
    pub user_id: Option<i32>,
}
