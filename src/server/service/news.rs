use sea_orm::DatabaseConnection;

use crate::server::{
    data::news::NewsRepository,
    error::AppError,
    model::news::{CreateNewsParam, News, UpdateNewsParam},
};

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<News>, AppError> {
        Ok(NewsRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, news_id: i32) -> Result<News, AppError> {
        NewsRepository::new(self.db)
            .find_by_id(news_id)
            .await?
            .ok_or_else(|| not_found(news_id))
    }

    pub async fn create(&self, param: CreateNewsParam) -> Result<News, AppError> {
        if param.title.is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }

        Ok(NewsRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, news_id: i32, param: UpdateNewsParam) -> Result<News, AppError> {
        if param.title.as_deref().is_some_and(str::is_empty) {
            return Err(AppError::BadRequest("Title cannot be empty".to_string()));
        }

        NewsRepository::new(self.db)
            .update(news_id, param)
            .await?
            .ok_or_else(|| not_found(news_id))
    }

    pub async fn delete(&self, news_id: i32) -> Result<(), AppError> {
        if !NewsRepository::new(self.db).delete(news_id).await? {
            return Err(not_found(news_id));
        }

        Ok(())
    }
}

fn not_found(news_id: i32) -> AppError {
    AppError::NotFound(format!("News {} not found", news_id))
}
