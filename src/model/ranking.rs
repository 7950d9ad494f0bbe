use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRankingDto {
    pub id: i32,
    pub month: String,
    pub user_id: i32,
    pub user_name: Option<String>,
    pub position: i32,
    pub skill_rating: i32,
    pub matches: i32,
    pub kills: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct GenerateRankingDto {
    /// `YYYY-MM`
    pub month: String,
}
