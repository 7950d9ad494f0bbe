//! User data repository for database operations.
//!
//! Handles account upserts on login, lookups, profile edits and the full
//! recomputation of a user's cumulative stats from their match rows.

use std::collections::HashMap;

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::page_count,
    model::{
        stats::UserTotals,
        user::{PaginatedUsers, UpdateUserParam, UpsertUserParam, User},
    },
};

/// Rating of a user without any recorded match.
const BASE_SKILL_RATING: i32 = 1000;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn new_user(
        steam_id: String,
        name: String,
        avatar_url: Option<String>,
        is_admin: bool,
    ) -> entity::user::ActiveModel {
        entity::user::ActiveModel {
            steam_id: ActiveValue::Set(steam_id),
            name: ActiveValue::Set(name),
            avatar_url: ActiveValue::Set(avatar_url),
            is_admin: ActiveValue::Set(is_admin),
            total_kills: ActiveValue::Set(0),
            total_deaths: ActiveValue::Set(0),
            total_assists: ActiveValue::Set(0),
            total_headshots: ActiveValue::Set(0),
            total_damage: ActiveValue::Set(0),
            total_matches: ActiveValue::Set(0),
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
            skill_rating: ActiveValue::Set(BASE_SKILL_RATING),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }

    /// Upserts a user on login.
    ///
    /// Inserts a new user or refreshes name and avatar of an existing one. The admin
    /// flag is only written when explicitly provided, so a regular login never
    /// revokes admin rights.
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let mut update_columns = vec![
            entity::user::Column::Name,
            entity::user::Column::AvatarUrl,
        ];

        if param.is_admin.is_some() {
            update_columns.push(entity::user::Column::IsAdmin);
        }

        let entity = entity::prelude::User::insert(Self::new_user(
            param.steam_id,
            param.name,
            param.avatar_url,
            param.is_admin.unwrap_or(false),
        ))
        .on_conflict(
            OnConflict::column(entity::user::Column::SteamId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Returns the user with `steam_id`, creating it with `name` when unknown.
    ///
    /// An existing user keeps their current name.
    pub async fn find_or_create_by_steam_id(
        &self,
        steam_id: &str,
        name: &str,
    ) -> Result<entity::user::Model, DbErr> {
        if let Some(existing) = entity::prelude::User::find()
            .filter(entity::user::Column::SteamId.eq(steam_id))
            .one(self.db)
            .await?
        {
            return Ok(existing);
        }

        Self::new_user(steam_id.to_string(), name.to_string(), None, false)
            .insert(self.db)
            .await
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_steam_id(&self, steam_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::SteamId.eq(steam_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Loads the given users keyed by id. Unknown ids are absent from the map.
    pub async fn find_by_ids(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, entity::user::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(|user| (user.id, user)).collect())
    }

    /// Checks if any admin users exist in the database.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::IsAdmin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets users with pagination, ordered by skill rating descending.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users per page
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsers, DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::SkillRating)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect();

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages: page_count(total, per_page),
        })
    }

    /// All users ordered by skill rating descending, ties broken by id.
    pub async fn get_all_by_rating(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_desc(entity::user::Column::SkillRating)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_all_ids(&self) -> Result<Vec<i32>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(|user| user.id).collect())
    }

    /// Applies a partial profile update.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    pub async fn update(
        &self,
        user_id: i32,
        param: UpdateUserParam,
    ) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(avatar_url) = param.avatar_url {
            active.avatar_url = ActiveValue::Set(Some(avatar_url));
        }
        if let Some(is_admin) = param.is_admin {
            active.is_admin = ActiveValue::Set(is_admin);
        }

        let updated = active.update(self.db).await?;
        Ok(Some(User::from_entity(updated)))
    }

    /// Deletes a user. Dependent rows are removed by the foreign key cascades.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Recomputes a user's cumulative totals and skill rating from their match rows.
    ///
    /// Always a full recomputation, so calling it repeatedly yields the same result.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User with refreshed totals
    /// - `Ok(None)` - No user with that id
    pub async fn recalculate_user_stats(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let rows = entity::prelude::MatchStats::find()
            .filter(entity::match_stats::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;
        let totals = UserTotals::from_rows(&rows)?;

        let mut active: entity::user::ActiveModel = existing.into();
        active.total_kills = ActiveValue::Set(totals.kills);
        active.total_deaths = ActiveValue::Set(totals.deaths);
        active.total_assists = ActiveValue::Set(totals.assists);
        active.total_headshots = ActiveValue::Set(totals.headshots);
        active.total_damage = ActiveValue::Set(totals.damage);
        active.total_matches = ActiveValue::Set(totals.matches);
        active.total_mvps = ActiveValue::Set(totals.mvps);
        active.total_aces = ActiveValue::Set(totals.aces);
        active.total_quad_kills = ActiveValue::Set(totals.quad_kills);
        active.total_triple_kills = ActiveValue::Set(totals.triple_kills);
        active.total_double_kills = ActiveValue::Set(totals.double_kills);
        active.total_clutch_1v1_wins = ActiveValue::Set(totals.clutch_1v1_wins);
        active.total_clutch_1v2_wins = ActiveValue::Set(totals.clutch_1v2_wins);
        active.total_entry_count = ActiveValue::Set(totals.entry_count);
        active.total_entry_wins = ActiveValue::Set(totals.entry_wins);
        active.total_enemies_flashed = ActiveValue::Set(totals.enemies_flashed);
        active.total_utility_damage = ActiveValue::Set(totals.utility_damage);
        active.skill_rating = ActiveValue::Set(totals.skill_rating());

        let updated = active.update(self.db).await?;
        Ok(Some(User::from_entity(updated)))
    }
}
