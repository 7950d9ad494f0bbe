use chrono::{DateTime, Utc};

use crate::model::ranking::MonthlyRankingDto;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRanking {
    pub id: i32,
    pub month: String,
    pub user_id: i32,
    pub user_name: Option<String>,
    pub position: i32,
    pub skill_rating: i32,
    pub matches: i32,
    pub kills: i32,
    pub created_at: DateTime<Utc>,
}

impl MonthlyRanking {
    pub fn from_entity(entity: entity::monthly_ranking::Model, user_name: Option<String>) -> Self {
        Self {
            id: entity.id,
            month: entity.month,
            user_id: entity.user_id,
            user_name,
            position: entity.position,
            skill_rating: entity.skill_rating,
            matches: entity.matches,
            kills: entity.kills,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MonthlyRankingDto {
        MonthlyRankingDto {
            id: self.id,
            month: self.month,
            user_id: self.user_id,
            user_name: self.user_name,
            position: self.position,
            skill_rating: self.skill_rating,
            matches: self.matches,
            kills: self.kills,
        }
    }
}

/// One row of a snapshot about to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntryParam {
    pub user_id: i32,
    pub position: i32,
    pub skill_rating: i32,
    pub matches: i32,
    pub kills: i32,
}

/// Assigns 1-based positions to users already ordered by rating.
///
/// Users without a played match are left out.
pub fn rank_users(users: &[entity::user::Model]) -> Vec<RankingEntryParam> {
    users
        .iter()
        .filter(|user| user.total_matches > 0)
        .enumerate()
        .map(|(index, user)| RankingEntryParam {
            user_id: user.id,
            position: index as i32 + 1,
            skill_rating: user.skill_rating,
            matches: user.total_matches,
            kills: user.total_kills,
        })
        .collect()
}
