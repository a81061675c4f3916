//! Invite factory for creating registration tokens.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct InviteFactory<'a> {
    db: &'a DatabaseConnection,
    token: String,
    email: Option<String>,
    used: bool,
}

impl<'a> InviteFactory<'a> {
    /// Creates a new InviteFactory with an unused token.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            token: format!("TOK{}", id),
            email: None,
            used: false,
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn used(mut self, used: bool) -> Self {
        self.used = used;
        self
    }

    /// Builds and inserts the invite into the database.
    pub async fn build(self) -> Result<entity::invite::Model, DbErr> {
        entity::invite::ActiveModel {
            token: ActiveValue::Set(self.token),
            email: ActiveValue::Set(self.email),
            used: ActiveValue::Set(self.used),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unused invite with a generated token.
pub async fn create_invite(db: &DatabaseConnection) -> Result<entity::invite::Model, DbErr> {
    InviteFactory::new(db).build().await
}
