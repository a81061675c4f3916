use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use entity::enums::Role;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user account
    ///
    /// # Arguments
    /// - `username`: Display name, unique
    /// - `email`: Contact address, unique
    /// - `password_hash`: Argon2 hash of the password, never the plain text
    /// - `role`: Access level for the account
    ///
    /// # Returns
    /// - `Ok(Model)`: The created user
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
        role: Role,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await
    }

    /// Updates an account, leaving `None` fields untouched
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated user
    /// - `Err(DbErr)`: User not found or database error
    pub async fn update(
        &self,
        id: i32,
        username: Option<String>,
        email: Option<String>,
        password_hash: Option<String>,
        role: Option<Role>,
    ) -> Result<entity::user::Model, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Err(DbErr::RecordNotFound(format!("User {id} not found")));
        };

        let mut active: entity::user::ActiveModel = user.into();

        if let Some(username) = username {
            active.username = ActiveValue::Set(username);
        }
        if let Some(email) = email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(role) = role {
            active.role = ActiveValue::Set(role);
        }

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
