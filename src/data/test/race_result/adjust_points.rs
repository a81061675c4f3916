use super::*;

/// Tests mirroring a penalty onto a stored result line.
///
/// Expected: Ok with the points reduced by the delta
#[tokio::test]
async fn applies_negative_delta() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_result_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, race) = factory::helpers::create_race_with_season(db).await?;
    let line = factory::race_result::create_race_result(db, race.id, pilot.id).await?;

    let repo = RaceResultRepository::new(db);
    let updated = repo.adjust_points(line.id, -5.0).await?;

    assert_eq!(updated.points, line.points - 5.0);

    Ok(())
}

/// Tests that a refund restores the exact pre-penalty value.
///
/// Expected: Ok with the original points after penalty and refund
#[tokio::test]
async fn refund_restores_original_points() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_result_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, race) = factory::helpers::create_race_with_season(db).await?;
    let line = factory::race_result::create_race_result(db, race.id, pilot.id).await?;

    let repo = RaceResultRepository::new(db);
    repo.adjust_points(line.id, -10.0).await?;
    let restored = repo.adjust_points(line.id, 10.0).await?;

    assert_eq!(restored.points, line.points);

    Ok(())
}
