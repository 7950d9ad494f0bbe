//! MatchStats factory for creating per-player stat lines.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a player's stats row in a match.
///
/// Defaults to 20 kills, 10 deaths, 5 assists, 10 headshots and 2000 damage on team
/// `CT`. Every other counter is zero.
pub struct MatchStatsFactory<'a> {
    db: &'a DatabaseConnection,
    match_id: i32,
    user_id: i32,
    team: String,
    kills: i32,
    deaths: i32,
    assists: i32,
    headshots: i32,
    damage: i32,
    enemy5ks: i32,
    is_mvp: bool,
}

impl<'a> MatchStatsFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, match_id: i32, user_id: i32) -> Self {
        Self {
            db,
            match_id,
            user_id,
            team: "CT".to_string(),
            kills: 20,
            deaths: 10,
            assists: 5,
            headshots: 10,
            damage: 2000,
            enemy5ks: 0,
            is_mvp: false,
        }
    }

    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }

    /// Sets kills, deaths and headshots.
    pub fn kdh(mut self, kills: i32, deaths: i32, headshots: i32) -> Self {
        self.kills = kills;
        self.deaths = deaths;
        self.headshots = headshots;
        self
    }

    pub fn damage(mut self, damage: i32) -> Self {
        self.damage = damage;
        self
    }

    pub fn aces(mut self, aces: i32) -> Self {
        self.enemy5ks = aces;
        self
    }

    pub fn mvp(mut self, is_mvp: bool) -> Self {
        self.is_mvp = is_mvp;
        self
    }

    /// Builds and inserts the stats row into the database.
    pub async fn build(self) -> Result<entity::match_stats::Model, DbErr> {
        entity::match_stats::ActiveModel {
            match_id: ActiveValue::Set(self.match_id),
            user_id: ActiveValue::Set(self.user_id),
            team: ActiveValue::Set(self.team),
            kills: ActiveValue::Set(self.kills),
            deaths: ActiveValue::Set(self.deaths),
            assists: ActiveValue::Set(self.assists),
            headshots: ActiveValue::Set(self.headshots),
            damage: ActiveValue::Set(self.damage),
            enemy5ks: ActiveValue::Set(self.enemy5ks),
            enemy4ks: ActiveValue::Set(0),
            enemy3ks: ActiveValue::Set(0),
            enemy2ks: ActiveValue::Set(0),
            utility_count: ActiveValue::Set(0),
            utility_damage: ActiveValue::Set(0),
            utility_successes: ActiveValue::Set(0),
            utility_enemies: ActiveValue::Set(0),
            flash_count: ActiveValue::Set(0),
            flash_successes: ActiveValue::Set(0),
            enemies_flashed: ActiveValue::Set(0),
            v1_count: ActiveValue::Set(0),
            v1_wins: ActiveValue::Set(0),
            v2_count: ActiveValue::Set(0),
            v2_wins: ActiveValue::Set(0),
            entry_count: ActiveValue::Set(0),
            entry_wins: ActiveValue::Set(0),
            shots_fired: ActiveValue::Set(0),
            shots_on_target: ActiveValue::Set(0),
            is_mvp: ActiveValue::Set(self.is_mvp),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a default stats row for `user_id` in `match_id`.
pub async fn create_match_stats(
    db: &DatabaseConnection,
    match_id: i32,
    user_id: i32,
) -> Result<entity::match_stats::Model, DbErr> {
    MatchStatsFactory::new(db, match_id, user_id).build().await
}
