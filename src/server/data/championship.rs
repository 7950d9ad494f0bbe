use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::championship::RegistrationStatus,
    server::{
        data::user::UserRepository,
        model::championship::{CreateRegistrationParam, Registration},
    },
};

pub struct ChampionshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChampionshipRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    async fn with_user_name(
        &self,
        entity: entity::championship_registration::Model,
    ) -> Result<Registration, DbErr> {
        let user = entity::prelude::User::find_by_id(entity.user_id)
            .one(self.db)
            .await?;
        Registration::from_entity(entity, user.map(|user| user.name))
    }

    /// Creates a registration. The unique index on `user_id` rejects a second one.
    pub async fn create(&self, param: CreateRegistrationParam) -> Result<Registration, DbErr> {
        let entity = entity::championship_registration::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            team_name: ActiveValue::Set(param.team_name),
            notes: ActiveValue::Set(param.notes),
            status: ActiveValue::Set(RegistrationStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.with_user_name(entity).await
    }

    /// All registrations in signup order.
    pub async fn get_all(&self) -> Result<Vec<Registration>, DbErr> {
        let rows = entity::prelude::ChampionshipRegistration::find()
            .order_by_asc(entity::championship_registration::Column::CreatedAt)
            .order_by_asc(entity::championship_registration::Column::Id)
            .all(self.db)
            .await?;

        let user_ids: Vec<i32> = rows.iter().map(|row| row.user_id).collect();
        let users = UserRepository::new(self.db).find_by_ids(&user_ids).await?;

        rows.into_iter()
            .map(|row| {
                let name = users.get(&row.user_id).map(|user| user.name.clone());
                Registration::from_entity(row, name)
            })
            .collect()
    }

    pub async fn find_by_id(&self, registration_id: i32) -> Result<Option<Registration>, DbErr> {
        match entity::prelude::ChampionshipRegistration::find_by_id(registration_id)
            .one(self.db)
            .await?
        {
            Some(entity) => self.with_user_name(entity).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn find_by_user(&self, user_id: i32) -> Result<Option<Registration>, DbErr> {
        match entity::prelude::ChampionshipRegistration::find()
            .filter(entity::championship_registration::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        {
            Some(entity) => self.with_user_name(entity).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn update_status(
        &self,
        registration_id: i32,
        status: RegistrationStatus,
    ) -> Result<Option<Registration>, DbErr> {
        let Some(existing) = entity::prelude::ChampionshipRegistration::find_by_id(registration_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::championship_registration::ActiveModel = existing.into();
        active.status = ActiveValue::Set(status.as_str().to_string());

        let updated = active.update(self.db).await?;
        self.with_user_name(updated).await.map(Some)
    }

    pub async fn delete(&self, registration_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ChampionshipRegistration::delete_by_id(registration_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
