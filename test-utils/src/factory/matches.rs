//! Match factory for creating test match entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test matches with customizable fields.
///
/// Defaults to a 13-7 `CT` win on `de_dust2` with a unique external match id.
pub struct MatchFactory<'a> {
    db: &'a DatabaseConnection,
    external_match_id: String,
    map_number: i32,
    map: String,
    team1_score: i32,
    team2_score: i32,
    winner_team: Option<String>,
}

impl<'a> MatchFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            external_match_id: format!("match-{}", next_id()),
            map_number: 0,
            map: "de_dust2".to_string(),
            team1_score: 13,
            team2_score: 7,
            winner_team: Some("CT".to_string()),
        }
    }

    pub fn external_match_id(mut self, external_match_id: impl Into<String>) -> Self {
        self.external_match_id = external_match_id.into();
        self
    }

    pub fn map_number(mut self, map_number: i32) -> Self {
        self.map_number = map_number;
        self
    }

    pub fn winner_team(mut self, winner_team: Option<&str>) -> Self {
        self.winner_team = winner_team.map(str::to_string);
        self
    }

    /// Builds and inserts the match entity into the database.
    pub async fn build(self) -> Result<entity::matches::Model, DbErr> {
        entity::matches::ActiveModel {
            external_match_id: ActiveValue::Set(self.external_match_id),
            map_number: ActiveValue::Set(self.map_number),
            map: ActiveValue::Set(self.map),
            team1_name: ActiveValue::Set("CT".to_string()),
            team2_name: ActiveValue::Set("TERRORIST".to_string()),
            team1_score: ActiveValue::Set(self.team1_score),
            team2_score: ActiveValue::Set(self.team2_score),
            winner_team: ActiveValue::Set(self.winner_team),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a match with default values.
pub async fn create_match(db: &DatabaseConnection) -> Result<entity::matches::Model, DbErr> {
    MatchFactory::new(db).build().await
}
