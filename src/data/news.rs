use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct NewsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        title: String,
        subtitle: Option<String>,
        body: String,
        image_url: Option<String>,
        author_id: i32,
    ) -> Result<entity::news::Model, DbErr> {
        entity::news::ActiveModel {
            title: ActiveValue::Set(title),
            subtitle: ActiveValue::Set(subtitle),
            body: ActiveValue::Set(body),
            image_url: ActiveValue::Set(image_url),
            published_at: ActiveValue::Set(Utc::now()),
            author_id: ActiveValue::Set(author_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::news::Model>, DbErr> {
        entity::prelude::News::find_by_id(id).one(self.db).await
    }

    /// Gets published articles newest first
    pub async fn get_latest(&self, limit: u64) -> Result<Vec<entity::news::Model>, DbErr> {
        use sea_orm::QuerySelect;

        entity::prelude::News::find()
            .order_by_desc(entity::news::Column::PublishedAt)
            .limit(limit)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        title: Option<String>,
        subtitle: Option<Option<String>>,
        body: Option<String>,
        image_url: Option<Option<String>>,
    ) -> Result<entity::news::Model, DbErr> {
        let Some(news) = self.find_by_id(id).await? else {
            return Err(DbErr::RecordNotFound(format!("News {id} not found")));
        };

        let mut active: entity::news::ActiveModel = news.into();

        if let Some(title) = title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(subtitle) = subtitle {
            active.subtitle = ActiveValue::Set(subtitle);
        }
        if let Some(body) = body {
            active.body = ActiveValue::Set(body);
        }
        if let Some(image_url) = image_url {
            active.image_url = ActiveValue::Set(image_url);
        }

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::News::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
