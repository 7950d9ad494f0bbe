use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::championship::{CreateRegistrationDto, RegistrationDto, RegistrationStatus};

/// A user's entry for the championship. Each user holds at most one.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub id: i32,
    pub user_id: i32,
    pub user_name: Option<String>,
    pub team_name: Option<String>,
    pub notes: Option<String>,
    pub status: RegistrationStatus,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    pub fn from_entity(
        entity: entity::championship_registration::Model,
        user_name: Option<String>,
    ) -> Result<Self, DbErr> {
        let status = RegistrationStatus::parse(&entity.status).ok_or_else(|| {
            DbErr::Custom(format!("Unknown registration status '{}'", entity.status))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            user_name,
            team_name: entity.team_name,
            notes: entity.notes,
            status,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> RegistrationDto {
        RegistrationDto {
            id: self.id,
            user_id: self.user_id,
            user_name: self.user_name,
            team_name: self.team_name,
            notes: self.notes,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRegistrationParam {
    pub user_id: i32,
    pub team_name: Option<String>,
    pub notes: Option<String>,
}

impl CreateRegistrationParam {
    pub fn from_dto(user_id: i32, dto: CreateRegistrationDto) -> Self {
        let non_empty = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            user_id,
            team_name: non_empty(dto.team_name),
            notes: non_empty(dto.notes),
        }
    }
}
