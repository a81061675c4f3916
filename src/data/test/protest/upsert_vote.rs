use super::*;

/// Tests recording a first vote.
///
/// Expected: Ok with the vote stored for the admin
#[tokio::test]
async fn records_first_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_protest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let (_, accuser) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, accused) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, race) = factory::helpers::create_race_with_season(db).await?;
    let protest = factory::protest::create_protest(db, race.id, accuser.id, accused.id).await?;

    let repo = ProtestRepository::new(db);
    let vote = repo.upsert_vote(protest.id, admin.id, Verdict::Light).await?;

    assert_eq!(vote.choice, Verdict::Light);
    assert_eq!(repo.get_votes(protest.id).await?.len(), 1);

    Ok(())
}

/// Tests that a second vote from the same admin replaces the first.
///
/// Expected: Ok with one row holding the latest choice
#[tokio::test]
async fn replaces_existing_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_protest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let (_, accuser) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, accused) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, race) = factory::helpers::create_race_with_season(db).await?;
    let protest = factory::protest::create_protest(db, race.id, accuser.id, accused.id).await?;

    let repo = ProtestRepository::new(db);
    let first = repo.upsert_vote(protest.id, admin.id, Verdict::Light).await?;
    let second = repo.upsert_vote(protest.id, admin.id, Verdict::Severe).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.choice, Verdict::Severe);
    assert_eq!(repo.get_votes(protest.id).await?.len(), 1);

    Ok(())
}

/// Tests that votes from different admins are kept apart.
///
/// Expected: Ok with one row per admin
#[tokio::test]
async fn keeps_votes_per_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_protest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin_one = factory::user::create_admin(db).await?;
    let admin_two = factory::user::create_admin(db).await?;
    let (_, accuser) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, accused) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, race) = factory::helpers::create_race_with_season(db).await?;
    let protest = factory::protest::create_protest(db, race.id, accuser.id, accused.id).await?;

    let repo = ProtestRepository::new(db);
    repo.upsert_vote(protest.id, admin_one.id, Verdict::Dismissed).await?;
    repo.upsert_vote(protest.id, admin_two.id, Verdict::Medium).await?;

    assert_eq!(repo.get_votes(protest.id).await?.len(), 2);

    Ok(())
}
