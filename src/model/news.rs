use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct NewsDto {
    pub id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub body: String,
    pub image_url: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub published_at: DateTime<Utc>,
    pub author_name: String,
}

impl NewsDto {
    pub fn from_model(news: entity::news::Model, author_name: String) -> Self {
        Self {
            id: news.id,
            title: news.title,
            subtitle: news.subtitle,
            body: news.body,
            image_url: news.image_url,
            published_at: news.published_at,
            author_name,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateNewsDto {
    pub title: String,
    pub subtitle: Option<String>,
    pub body: String,
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdateNewsDto {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
}
