//! Domain models for news posts.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub author_id: i32,
}

impl News {
    pub fn from_entity(entity: entity::news::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            image_url: entity.image_url,
            created_at: entity.created_at,
            author_id: entity.author_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNewsParams {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author_id: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateNewsParams {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}
