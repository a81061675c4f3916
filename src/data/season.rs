use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct SeasonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        start_date: NaiveDate,
    ) -> Result<entity::season::Model, DbErr> {
        entity::season::ActiveModel {
            name: ActiveValue::Set(name),
            active: ActiveValue::Set(true),
            start_date: ActiveValue::Set(start_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::season::Model>, DbErr> {
        entity::prelude::Season::find_by_id(id).one(self.db).await
    }

    /// Finds the currently active season, if any. At most one season is
    /// active at a time.
    pub async fn find_active(&self) -> Result<Option<entity::season::Model>, DbErr> {
        entity::prelude::Season::find()
            .filter(entity::season::Column::Active.eq(true))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::season::Model>, DbErr> {
        entity::prelude::Season::find()
            .order_by_desc(entity::season::Column::StartDate)
            .all(self.db)
            .await
    }

    pub async fn deactivate(&self, id: i32) -> Result<entity::season::Model, DbErr> {
        let Some(season) = self.find_by_id(id).await? else {
            return Err(DbErr::RecordNotFound(format!("Season {id} not found")));
        };

        let mut active: entity::season::ActiveModel = season.into();
        active.active = ActiveValue::Set(false);

        active.update(self.db).await
    }
}
