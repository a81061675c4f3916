use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    controller::auth::SESSION_AUTH_USER_ID,
    data::{pilot::PilotRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
};

pub enum Permission {
    Admin,
    SuperAdmin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session to a user and checks the required permissions.
    ///
    /// # Arguments
    /// - `permissions` - Roles the user must hold, checked in order
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - The authenticated user
    /// - `Err(AppError::AuthErr)` - No session, stale session, or missing role
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.role.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin endpoint without the required role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::SuperAdmin => {
                    if user.role != entity::enums::Role::SuperAdmin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted a super admin endpoint without the required role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Resolves the session to a user and its pilot profile.
    ///
    /// Pilot-facing endpoints (check-in, protests, profile) require a profile
    /// in addition to a valid session.
    ///
    /// # Returns
    /// - `Ok((user, pilot))` - The authenticated user and their pilot profile
    /// - `Err(AppError::AuthErr)` - No session, stale session, or no profile
    pub async fn require_pilot(
        &self,
    ) -> Result<(entity::user::Model, entity::pilot::Model), AppError> {
        let user = self.require(&[]).await?;

        let pilot_repo = PilotRepository::new(self.db);

        let Some(pilot) = pilot_repo.find_by_user_id(user.id).await? else {
            return Err(AuthError::NoPilotProfile(user.id).into());
        };

        Ok((user, pilot))
    }
}
