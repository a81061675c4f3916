use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct InviteDto {
    pub id: i32,
    pub token: String,
    pub email: Option<String>,
    pub used: bool,
}

impl From<entity::invite::Model> for InviteDto {
    fn from(invite: entity::invite::Model) -> Self {
        Self {
            id: invite.id,
            token: invite.token,
            email: invite.email,
            used: invite.used,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateInviteDto {
    pub email: Option<String>,
}
