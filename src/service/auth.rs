//! Account authentication and invite-only registration.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use entity::enums::{Grid, Role};

use crate::{
    data::{invite::InviteRepository, pilot::PilotRepository, user::UserRepository},
    error::{auth::AuthError, config::ConfigError, AppError},
    model::auth::RegisterDto,
    service::scoring,
};

/// Hashes a password with Argon2 and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ConfigError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored hash. Malformed hashes count as a
/// failed verification rather than an error.
pub fn verify_password(hash: &str, password: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Authenticates a user by username and password.
///
/// Deactivated accounts fail the same way bad credentials do, so a removed
/// pilot cannot tell whether their account still exists.
///
/// # Returns
/// - `Ok(Model)`: The authenticated user
/// - `Err(AppError::AuthErr(InvalidCredentials))`: Unknown user, wrong
///   password, or deactivated account
pub async fn login(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<entity::user::Model, AppError> {
    let user_repo = UserRepository::new(db);

    let Some(user) = user_repo.find_by_username(username).await? else {
        return Err(AuthError::InvalidCredentials.into());
    };

    if user.role == Role::Inactive || !verify_password(&user.password_hash, password) {
        return Err(AuthError::InvalidCredentials.into());
    }

    Ok(user)
}

/// Registers a new pilot account from an invite token.
///
/// Consumes the invite, creates the account, and attaches an unranked pilot
/// profile with a full license. New pilots earn a grid placement through the
/// seletiva.
///
/// # Returns
/// - `Ok(Model)`: The created user
/// - `Err(AppError::BadRequest)`: Invalid or used token, or taken
///   username/email
pub async fn register(
    db: &DatabaseConnection,
    dto: RegisterDto,
) -> Result<entity::user::Model, AppError> {
    let invite_repo = InviteRepository::new(db);
    let user_repo = UserRepository::new(db);
    let pilot_repo = PilotRepository::new(db);

    let token = dto.token.trim().to_uppercase();

    let Some(invite) = invite_repo.find_by_token(&token).await? else {
        return Err(AppError::BadRequest("Invalid invite token".to_string()));
    };
    if invite.used {
        return Err(AppError::BadRequest(
            "This invite token has already been used".to_string(),
        ));
    }

    if user_repo.find_by_username(&dto.username).await?.is_some() {
        return Err(AppError::BadRequest(
            "This username is already taken".to_string(),
        ));
    }
    if user_repo.find_by_email(&dto.email).await?.is_some() {
        return Err(AppError::BadRequest(
            "An account with this email already exists".to_string(),
        ));
    }

    let password_hash = hash_password(&dto.password)?;

    let user = user_repo
        .create(dto.username, dto.email, password_hash, Role::Pilot)
        .await?;

    pilot_repo
        .create(
            user.id,
            dto.nickname,
            dto.real_name,
            dto.phone,
            Grid::Unranked,
            scoring::STARTING_CNH,
        )
        .await?;

    invite_repo.mark_used(invite.id).await?;

    tracing::info!("Registered new pilot account {} via invite", user.id);

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::prelude::Invite;
    use test_utils::{builder::TestBuilder, factory};

    fn registration(token: &str) -> RegisterDto {
        RegisterDto {
            token: token.to_string(),
            username: "speedster".to_string(),
            email: "speedster@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            nickname: "Speedster".to_string(),
            real_name: "Ayrton Silva".to_string(),
            phone: None,
        }
    }

    #[test]
    fn verifies_its_own_hashes() {
        let hash = hash_password("hunter2hunter2").unwrap();

        assert!(verify_password(&hash, "hunter2hunter2"));
        assert!(!verify_password(&hash, "wrong"));
        assert!(!verify_password("not a phc string", "hunter2hunter2"));
    }

    #[tokio::test]
    async fn register_consumes_the_invite_and_creates_an_unranked_pilot() {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_table(Invite)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let invite = factory::invite::InviteFactory::new(db)
            .token("ABC234")
            .build()
            .await
            .unwrap();

        // Tokens are matched case-insensitively.
        let user = register(db, registration(" abc234 ")).await.unwrap();

        assert_eq!(user.role, Role::Pilot);

        let pilot = PilotRepository::new(db)
            .find_by_user_id(user.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(pilot.grid, Grid::Unranked);
        assert_eq!(pilot.cnh_points, scoring::STARTING_CNH);

        let invite = InviteRepository::new(db)
            .find_by_token(&invite.token)
            .await
            .unwrap()
            .unwrap();
        assert!(invite.used);
    }

    #[tokio::test]
    async fn register_rejects_a_used_invite() {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_table(Invite)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::invite::InviteFactory::new(db)
            .token("ABC234")
            .used(true)
            .build()
            .await
            .unwrap();

        let result = register(db, registration("ABC234")).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn deactivated_accounts_cannot_log_in() {
        let test = TestBuilder::new().with_league_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let hash = hash_password("hunter2hunter2").unwrap();
        let user = factory::user::UserFactory::new(db)
            .password_hash(&hash)
            .role(Role::Inactive)
            .build()
            .await
            .unwrap();

        let result = login(db, &user.username, "hunter2hunter2").await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    #[tokio::test]
    async fn login_checks_the_password() {
        let test = TestBuilder::new().with_league_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let hash = hash_password("hunter2hunter2").unwrap();
        let user = factory::user::UserFactory::new(db)
            .password_hash(&hash)
            .build()
            .await
            .unwrap();

        assert!(login(db, &user.username, "hunter2hunter2").await.is_ok());
        assert!(login(db, &user.username, "wrong").await.is_err());
    }
}
