use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::news::{CreateNewsParams, News, UpdateNewsParams};

pub struct NewsRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NewsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a news post.
    pub async fn create(&self, params: CreateNewsParams) -> Result<News, DbErr> {
        let news = entity::news::ActiveModel {
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            image_url: ActiveValue::Set(params.image_url),
            created_at: ActiveValue::Set(Utc::now()),
            author_id: ActiveValue::Set(params.author_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(News::from_entity(news))
    }

    /// Gets a news post by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<News>, DbErr> {
        let news = entity::prelude::News::find_by_id(id).one(self.db).await?;

        Ok(news.map(News::from_entity))
    }

    /// Updates a news post's editable fields. The author and creation
    /// timestamp are immutable.
    pub async fn update(&self, id: i32, params: UpdateNewsParams) -> Result<News, DbErr> {
        let news = entity::prelude::News::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("News {} not found", id)))?;

        let mut active_model: entity::news::ActiveModel = news.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.content = ActiveValue::Set(params.content);
        active_model.image_url = ActiveValue::Set(params.image_url);

        let updated = active_model.update(self.db).await?;

        Ok(News::from_entity(updated))
    }

    /// Deletes a news post by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::News::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }
}
