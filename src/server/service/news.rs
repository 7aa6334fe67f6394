use sea_orm::DatabaseConnection;

use crate::server::{
    data::{news::NewsRepository, user::UserRepository},
    error::AppError,
    model::news::{CreateNewsParams, News, UpdateNewsParams},
};

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes a news post authored by an existing profile.
    pub async fn create(&self, params: CreateNewsParams) -> Result<News, AppError> {
        Self::validate_fields(&params.title, &params.content)?;

        UserRepository::new(self.db)
            .find_profile_by_id(params.author_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Author profile not found".to_string()))?;

        let news = NewsRepository::new(self.db).create(params).await?;

        Ok(news)
    }

    /// Gets a news post by id.
    pub async fn get(&self, news_id: i32) -> Result<News, AppError> {
        NewsRepository::new(self.db)
            .find_by_id(news_id)
            .await?
            .ok_or_else(|| AppError::NotFound("News not found".to_string()))
    }

    /// Updates a news post's title, content, and image.
    pub async fn update(&self, news_id: i32, params: UpdateNewsParams) -> Result<News, AppError> {
        Self::validate_fields(&params.title, &params.content)?;

        let repo = NewsRepository::new(self.db);

        repo.find_by_id(news_id)
            .await?
            .ok_or_else(|| AppError::NotFound("News not found".to_string()))?;

        let news = repo.update(news_id, params).await?;

        Ok(news)
    }

    /// Deletes a news post.
    pub async fn delete(&self, news_id: i32) -> Result<(), AppError> {
        let repo = NewsRepository::new(self.db);

        repo.find_by_id(news_id)
            .await?
            .ok_or_else(|| AppError::NotFound("News not found".to_string()))?;

        repo.delete(news_id).await?;

        Ok(())
    }

    fn validate_fields(title: &str, content: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }
        if content.trim().is_empty() {
            return Err(AppError::Validation("Content is required".to_string()));
        }
        Ok(())
    }
}
