//! News factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a news post authored by the given admin profile.
pub async fn create_news(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::news::Model, DbErr> {
    let id = next_id();
    entity::news::ActiveModel {
        id: ActiveValue::NotSet,
        title: ActiveValue::Set(format!("News {}", id)),
        content: ActiveValue::Set("Test news content".to_string()),
        image_url: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        author_id: ActiveValue::Set(author_id),
    }
    .insert(db)
    .await
}
