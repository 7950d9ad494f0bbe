use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceDto {
    pub balance: i64,
    pub last_daily_claim: Option<NaiveDate>,
    pub can_claim_daily: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct SpinDto {
    pub bet: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SymbolDto {
    Cherry,
    Lemon,
    Bell,
    Bar,
    Seven,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpinResultDto {
    pub reels: Vec<SymbolDto>,
    pub multiplier: i64,
    pub payout: i64,
    pub balance: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CaseKindDto {
    Standard,
    Premium,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct OpenCaseDto {
    pub case: CaseKindDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RarityDto {
    Consumer,
    Industrial,
    MilSpec,
    Restricted,
    Classified,
    Covert,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseResultDto {
    pub case: CaseKindDto,
    pub rarity: RarityDto,
    pub cost: i64,
    pub reward: i64,
    pub balance: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BetTypeDto {
    KillsOver,
    KdOver,
    Mvp,
    Win,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BetStatusDto {
    Pending,
    Won,
    Lost,
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct OddsQuery {
    pub target_user_id: i32,
    pub bet_type: BetTypeDto,
    pub threshold: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OddsDto {
    pub target_user_id: i32,
    pub bet_type: BetTypeDto,
    pub threshold: Option<f64>,
    pub odds: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBetDto {
    pub target_user_id: i32,
    pub bet_type: BetTypeDto,
    pub threshold: Option<f64>,
    pub amount: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BetDto {
    pub id: i32,
    pub bettor_id: i32,
    pub target_user_id: i32,
    pub bet_type: BetTypeDto,
    pub threshold: Option<f64>,
    pub amount: i64,
    pub odds: f64,
    pub status: BetStatusDto,
    pub match_id: Option<i32>,
    pub payout: i64,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}
