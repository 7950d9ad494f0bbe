use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::{
    data::user::UserRepository,
    model::news::{CreateNewsParam, News, UpdateNewsParam},
};

pub struct NewsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NewsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    async fn with_author(&self, entity: entity::news::Model) -> Result<News, DbErr> {
        let author_name = match entity.author_id {
            Some(author_id) => entity::prelude::User::find_by_id(author_id)
                .one(self.db)
                .await?
                .map(|user| user.name),
            None => None,
        };

        Ok(News::from_entity(entity, author_name))
    }

    pub async fn create(&self, param: CreateNewsParam) -> Result<News, DbErr> {
        let now = Utc::now();
        let entity = entity::news::ActiveModel {
            author_id: ActiveValue::Set(Some(param.author_id)),
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.with_author(entity).await
    }

    /// All posts, newest first.
    pub async fn get_all(&self) -> Result<Vec<News>, DbErr> {
        let rows = entity::prelude::News::find()
            .order_by_desc(entity::news::Column::CreatedAt)
            .order_by_desc(entity::news::Column::Id)
            .all(self.db)
            .await?;

        let author_ids: Vec<i32> = rows.iter().filter_map(|row| row.author_id).collect();
        let authors = UserRepository::new(self.db).find_by_ids(&author_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let name = row
                    .author_id
                    .and_then(|id| authors.get(&id))
                    .map(|user| user.name.clone());
                News::from_entity(row, name)
            })
            .collect())
    }

    pub async fn find_by_id(&self, news_id: i32) -> Result<Option<News>, DbErr> {
        match entity::prelude::News::find_by_id(news_id).one(self.db).await? {
            Some(entity) => self.with_author(entity).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn update(
        &self,
        news_id: i32,
        param: UpdateNewsParam,
    ) -> Result<Option<News>, DbErr> {
        let Some(existing) = entity::prelude::News::find_by_id(news_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::news::ActiveModel = existing.into();
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(content) = param.content {
            active.content = ActiveValue::Set(content);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;
        self.with_author(updated).await.map(Some)
    }

    pub async fn delete(&self, news_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::News::delete_by_id(news_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
