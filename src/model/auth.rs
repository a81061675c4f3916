use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Registration payload for invite-only sign up.
///
/// The token must match an unused invite. A pilot profile is created
/// alongside the account, starting unranked with a full license.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct RegisterDto {
    pub token: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub real_name: String,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct SessionUserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<entity::user::Model> for SessionUserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role.to_value(),
        }
    }
}
