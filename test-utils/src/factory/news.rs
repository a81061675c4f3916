//! News factory for creating published articles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct NewsFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    subtitle: Option<String>,
    body: String,
    author_id: i32,
}

impl<'a> NewsFactory<'a> {
    /// Creates a new NewsFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Article {id}"` where id is auto-incremented
    /// - body: a short placeholder paragraph
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Article {}", id),
            subtitle: None,
            body: "Race weekend recap.".to_string(),
            author_id,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds and inserts the article into the database.
    pub async fn build(self) -> Result<entity::news::Model, DbErr> {
        entity::news::ActiveModel {
            title: ActiveValue::Set(self.title),
            subtitle: ActiveValue::Set(self.subtitle),
            body: ActiveValue::Set(self.body),
            image_url: ActiveValue::Set(None),
            published_at: ActiveValue::Set(Utc::now()),
            author_id: ActiveValue::Set(self.author_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values authored by the given user.
pub async fn create_news(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::news::Model, DbErr> {
    NewsFactory::new(db, author_id).build().await
}
