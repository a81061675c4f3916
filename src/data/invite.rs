use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct InviteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InviteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        token: String,
        email: Option<String>,
    ) -> Result<entity::invite::Model, DbErr> {
        entity::invite::ActiveModel {
            token: ActiveValue::Set(token),
            email: ActiveValue::Set(email),
            used: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_token(&self, token: &str) -> Result<Option<entity::invite::Model>, DbErr> {
        entity::prelude::Invite::find()
            .filter(entity::invite::Column::Token.eq(token))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::invite::Model>, DbErr> {
        entity::prelude::Invite::find()
            .order_by_desc(entity::invite::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn mark_used(&self, id: i32) -> Result<entity::invite::Model, DbErr> {
        let Some(invite) = entity::prelude::Invite::find_by_id(id).one(self.db).await? else {
            return Err(DbErr::RecordNotFound(format!("Invite {id} not found")));
        };

        let mut active: entity::invite::ActiveModel = invite.into();
        active.used = ActiveValue::Set(true);

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Invite::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
