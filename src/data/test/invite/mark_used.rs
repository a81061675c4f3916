use super::*;
use entity::prelude::Invite;

/// Tests burning a token after a successful registration.
///
/// Expected: Ok with the invite flagged as used
#[tokio::test]
async fn flags_invite_as_used() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Invite).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let invite = factory::invite::create_invite(db).await?;

    let repo = InviteRepository::new(db);
    let used = repo.mark_used(invite.id).await?;

    assert!(used.used);

    Ok(())
}

/// Tests looking up an invite by its token.
///
/// Expected: Ok(Some) for the stored token, Ok(None) for an unknown one
#[tokio::test]
async fn find_by_token_matches_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Invite).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let invite = factory::invite::InviteFactory::new(db).token("ABC234").build().await?;

    let repo = InviteRepository::new(db);
    assert_eq!(
        repo.find_by_token("ABC234").await?.map(|i| i.id),
        Some(invite.id)
    );
    assert!(repo.find_by_token("ZZZ999").await?.is_none());

    Ok(())
}
