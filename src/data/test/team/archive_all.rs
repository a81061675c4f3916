use super::*;

/// Tests archiving every active team at season close.
///
/// Expected: Ok with all teams inactive and none deleted
#[tokio::test]
async fn deactivates_every_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::team::create_team(db).await?;
    factory::team::create_team(db).await?;
    factory::team::create_team(db).await?;

    let repo = TeamRepository::new(db);
    let archived = repo.archive_all().await?;

    assert_eq!(archived, 3);
    assert!(repo.get_active().await?.is_empty());

    Ok(())
}
