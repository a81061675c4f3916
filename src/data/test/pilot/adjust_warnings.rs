use super::*;

/// Tests incrementing a pilot's warning counter.
///
/// Expected: Ok with the counter incremented
#[tokio::test]
async fn increments_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;

    let repo = PilotRepository::new(db);
    let updated = repo.adjust_warnings(pilot.id, 1).await?;

    assert_eq!(updated.warnings, 1);

    Ok(())
}

/// Tests that the warning counter never goes below zero.
///
/// Expected: Ok with the counter clamped at zero
#[tokio::test]
async fn clamps_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;

    let repo = PilotRepository::new(db);
    let updated = repo.adjust_warnings(pilot.id, -2).await?;

    assert_eq!(updated.warnings, 0);

    Ok(())
}
