//! User factory for creating test user entities.

use crate::factory::helpers::{next_id, next_steam_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// All cumulative totals start at zero and the skill rating at the 1000 baseline,
/// matching a freshly registered player.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .steam_id("76561198000000001")
///     .name("CustomUser")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    steam_id: String,
    name: String,
    admin: bool,
    skill_rating: i32,
    total_matches: i32,
    total_kills: i32,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - steam_id: unique 17 digit SteamID64
    /// - name: `"Player {id}"`
    /// - admin: `false`
    /// - skill_rating: `1000`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            steam_id: next_steam_id(),
            name: format!("Player {}", next_id()),
            admin: false,
            skill_rating: 1000,
            total_matches: 0,
            total_kills: 0,
        }
    }

    pub fn steam_id(mut self, steam_id: impl Into<String>) -> Self {
        self.steam_id = steam_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Sets the stored skill rating without any backing match stats.
    pub fn skill_rating(mut self, skill_rating: i32) -> Self {
        self.skill_rating = skill_rating;
        self
    }

    /// Sets stored totals without any backing match stats.
    pub fn totals(mut self, matches: i32, kills: i32) -> Self {
        self.total_matches = matches;
        self.total_kills = kills;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            steam_id: ActiveValue::Set(self.steam_id),
            name: ActiveValue::Set(self.name),
            avatar_url: ActiveValue::Set(None),
            is_admin: ActiveValue::Set(self.admin),
            total_kills: ActiveValue::Set(self.total_kills),
            total_deaths: ActiveValue::Set(0),
            total_assists: ActiveValue::Set(0),
            total_headshots: ActiveValue::Set(0),
            total_damage: ActiveValue::Set(0),
            total_matches: ActiveValue::Set(self.total_matches),
            total_mvps: ActiveValue::Set(0),
            total_aces: ActiveValue::Set(0),
            total_quad_kills: ActiveValue::Set(0),
            total_triple_kills: ActiveValue::Set(0),
            total_double_kills: ActiveValue::Set(0),
            total_clutch_1v1_wins: ActiveValue::Set(0),
            total_clutch_1v2_wins: ActiveValue::Set(0),
            total_entry_count: ActiveValue::Set(0),
            total_entry_wins: ActiveValue::Set(0),
            total_enemies_flashed: ActiveValue::Set(0),
            total_utility_damage: ActiveValue::Set(0),
            skill_rating: ActiveValue::Set(self.skill_rating),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an admin user with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin(true).build().await
}
