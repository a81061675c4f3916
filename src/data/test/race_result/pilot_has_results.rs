use super::*;

/// Tests detecting race history for a pilot with stored lines.
///
/// Expected: Ok(true)
#[tokio::test]
async fn true_when_lines_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_result_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, race) = factory::helpers::create_race_with_season(db).await?;
    factory::race_result::create_race_result(db, race.id, pilot.id).await?;

    let repo = RaceResultRepository::new(db);
    assert!(repo.pilot_has_results(pilot.id).await?);

    Ok(())
}

/// Tests a pilot who never raced.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_without_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_result_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;

    let repo = RaceResultRepository::new(db);
    assert!(!repo.pilot_has_results(pilot.id).await?);

    Ok(())
}
