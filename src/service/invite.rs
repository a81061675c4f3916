//! Invite token generation.

use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{data::invite::InviteRepository, error::AppError};

/// Uppercase alphabet without lookalike characters, since tokens are read
/// out loud over voice chat.
const TOKEN_CHARS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const TOKEN_LEN: usize = 6;

fn generate_token() -> String {
    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| TOKEN_CHARS[rng.random_range(0..TOKEN_CHARS.len())] as char)
        .collect()
}

/// Creates an invite with a unique token, optionally earmarked for an email.
///
/// # Returns
/// - `Ok(Model)`: The created invite
/// - `Err(AppError)`: Database error
pub async fn create_invite(
    db: &DatabaseConnection,
    email: Option<String>,
) -> Result<entity::invite::Model, AppError> {
    let invite_repo = InviteRepository::new(db);

    // Collisions are rare at this alphabet size; retry a few times rather
    // than relying on the unique index error.
    for _ in 0..5 {
        let token = generate_token();

        if invite_repo.find_by_token(&token).await?.is_none() {
            return Ok(invite_repo.create(token, email).await?);
        }
    }

    Err(AppError::InternalError(
        "Failed to generate a unique invite token".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_six_chars_from_the_alphabet() {
        for _ in 0..100 {
            let token = generate_token();
            assert_eq!(token.len(), TOKEN_LEN);
            assert!(token.bytes().all(|b| TOKEN_CHARS.contains(&b)));
        }
    }
}
