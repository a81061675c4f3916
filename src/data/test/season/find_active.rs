use super::*;

/// Tests finding the running season among closed ones.
///
/// Expected: Ok(Some) with the active season
#[tokio::test]
async fn returns_running_season() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::season::SeasonFactory::new(db).active(false).build().await?;
    let running = factory::season::create_season(db).await?;

    let repo = SeasonRepository::new(db);
    let found = repo.find_active().await?;

    assert_eq!(found.map(|s| s.id), Some(running.id));

    Ok(())
}

/// Tests the off-season case with no active season.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_between_seasons() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::season::SeasonFactory::new(db).active(false).build().await?;

    let repo = SeasonRepository::new(db);
    assert!(repo.find_active().await?.is_none());

    Ok(())
}

/// Tests that closing a season clears its active flag.
///
/// Expected: Ok with the season inactive
#[tokio::test]
async fn deactivate_clears_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let season = factory::season::create_season(db).await?;

    let repo = SeasonRepository::new(db);
    let closed = repo.deactivate(season.id).await?;

    assert!(!closed.active);
    assert!(repo.find_active().await?.is_none());

    Ok(())
}
